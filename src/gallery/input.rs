// SPDX-License-Identifier: MPL-2.0
//! Mapping from raw keyboard and pointer input to gallery commands.
//!
//! | Input                       | Command                                   |
//! |-----------------------------|-------------------------------------------|
//! | Left arrow key / button     | `Advance(Previous)`                       |
//! | Right arrow key / button    | `Advance(Next)`                           |
//! | Escape                      | `ToggleFullScreen`, only when full screen |
//! | Toggle key (`f` by default) | `ToggleFullScreen`                        |
//! | Click on the main image     | `ToggleFullScreen`                        |
//! | Click on thumbnail *i*      | `Select(i)`                               |

use super::transition::Direction;

/// Default key switching full-screen mode on and off.
pub const DEFAULT_TOGGLE_FULL_SCREEN_KEY: char = 'f';

/// A request the controller knows how to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Advance(Direction),
    Select(usize),
    ToggleFullScreen,
}

/// Toolkit-independent key, as far as the gallery cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKey {
    ArrowLeft,
    ArrowRight,
    Escape,
    Character(char),
}

/// Clickable parts of the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    MainImage,
    Thumbnail(usize),
    PreviousArrow,
    NextArrow,
}

/// Keyboard bindings that can be changed from the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub toggle_full_screen: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            toggle_full_screen: DEFAULT_TOGGLE_FULL_SCREEN_KEY,
        }
    }
}

/// Maps a key press to a command. The toggle key matches regardless of case.
#[must_use]
pub fn map_key(key: GalleryKey, is_full_screen: bool, bindings: &KeyBindings) -> Option<Command> {
    match key {
        GalleryKey::ArrowLeft => Some(Command::Advance(Direction::Previous)),
        GalleryKey::ArrowRight => Some(Command::Advance(Direction::Next)),
        GalleryKey::Escape if is_full_screen => Some(Command::ToggleFullScreen),
        GalleryKey::Escape => None,
        GalleryKey::Character(c)
            if c.to_lowercase()
                .eq(bindings.toggle_full_screen.to_lowercase()) =>
        {
            Some(Command::ToggleFullScreen)
        }
        GalleryKey::Character(_) => None,
    }
}

#[must_use]
pub fn map_pointer(target: PointerTarget) -> Command {
    match target {
        PointerTarget::MainImage => Command::ToggleFullScreen,
        PointerTarget::Thumbnail(index) => Command::Select(index),
        PointerTarget::PreviousArrow => Command::Advance(Direction::Previous),
        PointerTarget::NextArrow => Command::Advance(Direction::Next),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_navigate_in_both_modes() {
        let bindings = KeyBindings::default();
        for full_screen in [false, true] {
            assert_eq!(
                map_key(GalleryKey::ArrowLeft, full_screen, &bindings),
                Some(Command::Advance(Direction::Previous))
            );
            assert_eq!(
                map_key(GalleryKey::ArrowRight, full_screen, &bindings),
                Some(Command::Advance(Direction::Next))
            );
        }
    }

    #[test]
    fn escape_only_leaves_full_screen() {
        let bindings = KeyBindings::default();
        assert_eq!(map_key(GalleryKey::Escape, false, &bindings), None);
        assert_eq!(
            map_key(GalleryKey::Escape, true, &bindings),
            Some(Command::ToggleFullScreen)
        );
    }

    #[test]
    fn toggle_key_works_unconditionally_and_ignores_case() {
        let bindings = KeyBindings::default();
        assert_eq!(
            map_key(GalleryKey::Character('f'), false, &bindings),
            Some(Command::ToggleFullScreen)
        );
        assert_eq!(
            map_key(GalleryKey::Character('F'), true, &bindings),
            Some(Command::ToggleFullScreen)
        );
        assert_eq!(map_key(GalleryKey::Character('g'), false, &bindings), None);
    }

    #[test]
    fn custom_toggle_key_replaces_default() {
        let bindings = KeyBindings {
            toggle_full_screen: 'z',
        };
        assert_eq!(map_key(GalleryKey::Character('f'), false, &bindings), None);
        assert_eq!(
            map_key(GalleryKey::Character('Z'), false, &bindings),
            Some(Command::ToggleFullScreen)
        );
    }

    #[test]
    fn pointer_targets_map_to_commands() {
        assert_eq!(
            map_pointer(PointerTarget::MainImage),
            Command::ToggleFullScreen
        );
        assert_eq!(map_pointer(PointerTarget::Thumbnail(4)), Command::Select(4));
        assert_eq!(
            map_pointer(PointerTarget::PreviousArrow),
            Command::Advance(Direction::Previous)
        );
    }
}
