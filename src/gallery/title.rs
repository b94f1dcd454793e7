// SPDX-License-Identifier: MPL-2.0
//! Title lookup port implemented by whatever owns the gallery images.

/// Provides the number of items and the display title of each one.
pub trait TitleSource {
    /// Number of items available.
    fn len(&self) -> usize;

    /// Display title of the item at `index`.
    ///
    /// Only called with indices below [`TitleSource::len`].
    fn title_of(&self, index: usize) -> String;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: AsRef<str>> TitleSource for [S] {
    fn len(&self) -> usize {
        <[S]>::len(self)
    }

    fn title_of(&self, index: usize) -> String {
        self.get(index)
            .map(|title| title.as_ref().to_string())
            .unwrap_or_default()
    }
}

impl<S: AsRef<str>> TitleSource for Vec<S> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn title_of(&self, index: usize) -> String {
        self.as_slice().title_of(index)
    }
}
