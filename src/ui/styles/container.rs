// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::gallery::Backdrop;
use crate::ui::design_tokens::palette;
use iced::widget::container;
use iced::{Background, Theme};

/// Page background behind the gallery, black in full-screen mode.
pub fn backdrop(backdrop: Backdrop) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let color = match backdrop {
            Backdrop::Default => theme.extended_palette().background.base.color,
            Backdrop::Black => palette::BLACK,
        };

        container::Style {
            background: Some(Background::Color(color)),
            ..container::Style::default()
        }
    }
}

/// Strip holding the thumbnails.
pub fn thumbnail_strip(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.weak.color;
    container::Style {
        background: Some(Background::Color(weak)),
        ..container::Style::default()
    }
}
