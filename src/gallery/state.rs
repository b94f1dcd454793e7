// SPDX-License-Identifier: MPL-2.0
//! Gallery navigation state and its validated item count.

use crate::error::GalleryError;

// =============================================================================
// ItemCount
// =============================================================================

/// Number of items in a gallery, guaranteed to be at least one.
///
/// Unlike the clamping UI newtypes, this one refuses invalid input: a gallery
/// without items is a wiring mistake that must reach the integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemCount(usize);

impl ItemCount {
    /// Returns the raw count.
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }

    /// Returns whether `index` addresses an item of this gallery.
    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        index < self.0
    }
}

impl TryFrom<usize> for ItemCount {
    type Error = GalleryError;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        if count == 0 {
            return Err(GalleryError::InvalidConfiguration { item_count: 0 });
        }
        Ok(Self(count))
    }
}

impl TryFrom<i64> for ItemCount {
    type Error = GalleryError;

    fn try_from(count: i64) -> Result<Self, Self::Error> {
        match usize::try_from(count) {
            Ok(count) if count > 0 => Ok(Self(count)),
            _ => Err(GalleryError::InvalidConfiguration { item_count: count }),
        }
    }
}

impl TryFrom<i32> for ItemCount {
    type Error = GalleryError;

    fn try_from(count: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(count))
    }
}

// =============================================================================
// GalleryState
// =============================================================================

/// Which image is shown and whether it is presented full screen.
///
/// Values are only produced by the transition functions, so
/// `current_index < item_count` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryState {
    current_index: usize,
    item_count: ItemCount,
    is_full_screen: bool,
}

impl GalleryState {
    /// Initial state: first item, windowed presentation.
    #[must_use]
    pub fn new(item_count: ItemCount) -> Self {
        Self {
            current_index: 0,
            item_count,
            is_full_screen: false,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn item_count(&self) -> ItemCount {
        self.item_count
    }

    #[must_use]
    pub fn is_full_screen(&self) -> bool {
        self.is_full_screen
    }

    /// Same state pointing at `index`. Callers validate the index first.
    pub(super) fn at_index(self, index: usize) -> Self {
        debug_assert!(self.item_count.contains(index));
        Self {
            current_index: index,
            ..self
        }
    }

    pub(super) fn with_full_screen(self, active: bool) -> Self {
        Self {
            is_full_screen: active,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_count_rejects_zero() {
        assert_eq!(
            ItemCount::try_from(0_usize),
            Err(GalleryError::InvalidConfiguration { item_count: 0 })
        );
    }

    #[test]
    fn item_count_rejects_negative_values() {
        assert_eq!(
            ItemCount::try_from(-4_i64),
            Err(GalleryError::InvalidConfiguration { item_count: -4 })
        );
        assert_eq!(
            ItemCount::try_from(-1_i32),
            Err(GalleryError::InvalidConfiguration { item_count: -1 })
        );
    }

    #[test]
    fn item_count_contains_only_valid_indices() {
        let count = ItemCount::try_from(3_usize).expect("valid count");
        assert!(count.contains(0));
        assert!(count.contains(2));
        assert!(!count.contains(3));
    }

    #[test]
    fn new_state_starts_at_first_item_windowed() {
        let count = ItemCount::try_from(5_i64).expect("valid count");
        let state = GalleryState::new(count);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.item_count().get(), 5);
        assert!(!state.is_full_screen());
    }
}
