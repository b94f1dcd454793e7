// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard events are translated to [`GalleryKey`]s here so the rest
//! of the application never sees toolkit key types.

use super::Message;
use crate::gallery::GalleryKey;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Window(window::Event::Opened { .. }) => {
            Some(Message::WindowOpened(window_id))
        }
        event::Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            if status == event::Status::Captured || modifiers.command() || modifiers.alt() {
                return None;
            }
            gallery_key(&key).map(|key| Message::KeyPressed {
                key,
                window: window_id,
            })
        }
        _ => None,
    })
}

/// Keys the gallery reacts to; everything else is dropped.
pub fn gallery_key(key: &Key) -> Option<GalleryKey> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(GalleryKey::ArrowLeft),
        Key::Named(Named::ArrowRight) => Some(GalleryKey::ArrowRight),
        Key::Named(Named::Escape) => Some(GalleryKey::Escape),
        Key::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(GalleryKey::Character(c)),
                _ => None,
            }
        }
        _ => None,
    }
}
