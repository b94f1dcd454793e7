// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`surface`] - Presentation model the gallery effects are applied to
//! - [`gallery_view`] - Title bar, main image, arrows and thumbnail strip
//! - [`empty_state`] - Shown when the folder holds no images
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod empty_state;
pub mod gallery_view;
pub mod styles;
pub mod surface;
