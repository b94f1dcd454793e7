// SPDX-License-Identifier: MPL-2.0
//! Gallery core: which image is shown, and what has to change on screen.
//!
//! The core is independent of any presentation framework. It consumes an item
//! count and a [`TitleSource`], and produces [`RenderEffects`] that a rendering
//! adapter applies.
//!
//! - [`transition`]: pure functions threading a [`GalleryState`] by value
//! - [`GalleryController`]: owns the state and runs input [`Command`]s
//! - [`input`]: keyboard and pointer mapping

pub mod controller;
pub mod effect;
pub mod input;
pub mod state;
pub mod title;
pub mod transition;

pub use controller::GalleryController;
pub use effect::{Backdrop, RenderEffect, RenderEffects};
pub use input::{map_key, map_pointer, Command, GalleryKey, KeyBindings, PointerTarget};
pub use state::{GalleryState, ItemCount};
pub use title::TitleSource;
pub use transition::{Direction, Transition};
