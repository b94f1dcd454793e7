// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

use crate::gallery::input::DEFAULT_TOGGLE_FULL_SCREEN_KEY;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Default thumbnail height in the strip (logical pixels).
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 96;

/// Minimum thumbnail height.
pub const MIN_THUMBNAIL_SIZE: u32 = 32;

/// Maximum thumbnail height.
pub const MAX_THUMBNAIL_SIZE: u32 = 256;

// ==========================================================================
// Presentation Defaults
// ==========================================================================

/// Whether the gallery opens in full-screen mode.
pub const DEFAULT_START_FULL_SCREEN: bool = false;

// ==========================================================================
// Keyboard Defaults
// ==========================================================================

/// Key toggling full-screen mode.
pub const DEFAULT_TOGGLE_KEY: char = DEFAULT_TOGGLE_FULL_SCREEN_KEY;

/// Clamps a configured thumbnail size into the supported range.
#[must_use]
pub fn clamp_thumbnail_size(size: u32) -> u32 {
    size.clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thumbnail_size_is_in_range() {
        assert_eq!(clamp_thumbnail_size(DEFAULT_THUMBNAIL_SIZE), DEFAULT_THUMBNAIL_SIZE);
    }

    #[test]
    fn thumbnail_size_is_clamped() {
        assert_eq!(clamp_thumbnail_size(1), MIN_THUMBNAIL_SIZE);
        assert_eq!(clamp_thumbnail_size(10_000), MAX_THUMBNAIL_SIZE);
    }
}
