// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

/// Application-level errors surfaced by the shell (scanning, config, gallery wiring).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Gallery Error: {0}")]
    Gallery(#[from] GalleryError),
}

/// Contract violations detected by the gallery core.
///
/// Both variants are caller bugs rather than runtime conditions: they are
/// raised at the call that introduces them and never clamped or defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// The gallery was initialized with zero or a negative number of items.
    #[error("invalid configuration: item count must be positive, got {item_count}")]
    InvalidConfiguration { item_count: i64 },

    /// A navigation target lies outside `[0, item_count)`.
    #[error("index {index} out of range for a gallery of {item_count} items")]
    IndexOutOfRange { index: usize, item_count: usize },
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
