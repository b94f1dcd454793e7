// SPDX-License-Identifier: MPL-2.0
//! `simple_gallery` is an image gallery built with the Iced GUI framework.
//!
//! The [`gallery`] module holds the toolkit-independent controller: it owns
//! the current index and full-screen flag and answers every operation with a
//! list of render effects. The [`app`] and [`ui`] modules apply those effects
//! to an Iced window.

#![doc(html_root_url = "https://docs.rs/simple_gallery/0.1.0")]

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
