// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::gallery::{GalleryKey, PointerTarget};
use crate::ui::empty_state;
use iced::window;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Click on an arrow, a thumbnail or the main image.
    Pointer(PointerTarget),
    KeyPressed {
        key: GalleryKey,
        window: window::Id,
    },
    /// First sighting of the main window; needed to switch its mode.
    WindowOpened(window::Id),
    EmptyState(empty_state::Message),
    /// Result from the open folder dialog.
    FolderPicked(Option<PathBuf>),
    /// A file or folder was dropped on the window.
    FileDropped(PathBuf),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP47 form (e.g. `fr`).
    pub lang: Option<String>,
    /// Directory to browse; falls back to the last one opened.
    pub directory: Option<PathBuf>,
    /// Start in full-screen mode regardless of the settings file.
    pub full_screen: bool,
}
