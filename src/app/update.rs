// SPDX-License-Identifier: MPL-2.0
//! Side-effecting helpers used by `App::update`.

use super::Message;
use iced::{window, Task};
use std::path::PathBuf;

/// Switches the OS window to `desired`, recording the applied mode.
///
/// Without a known window id nothing happens; the mode is synced again once
/// the window announces itself.
pub fn update_window_mode(
    window_full_screen: &mut bool,
    window_id: Option<&window::Id>,
    desired: bool,
) -> Task<Message> {
    if *window_full_screen == desired {
        return Task::none();
    }

    let Some(window_id) = window_id else {
        return Task::none();
    };

    *window_full_screen = desired;
    let mode = if desired {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(*window_id, mode)
}

/// Opens the native folder picker, starting in `last_directory` if it exists.
pub fn handle_open_folder_dialog(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new();

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_folder().await.map(|h| h.path().to_path_buf())
        },
        Message::FolderPicked,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_mode_is_left_alone_when_already_applied() {
        let mut applied = true;
        let id = window::Id::unique();
        let _ = update_window_mode(&mut applied, Some(&id), true);
        assert!(applied);
    }

    #[test]
    fn window_mode_waits_for_a_window_id() {
        let mut applied = false;
        let _ = update_window_mode(&mut applied, None, true);
        assert!(!applied);
    }

    #[test]
    fn window_mode_is_recorded_when_switched() {
        let mut applied = false;
        let id = window::Id::unique();
        let _ = update_window_mode(&mut applied, Some(&id), true);
        assert!(applied);
    }
}
