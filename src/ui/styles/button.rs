// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (empty-state "Open folder").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, elevation) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        _ => (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: elevation,
        ..button::Style::default()
    }
}

/// Previous/next arrows floating over the image.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::BLACK
            })),
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            ..button::Style::default()
        }
    }
}

/// Thumbnail in the strip; the selected one carries the shadow and a border.
pub fn thumbnail(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let accent = theme.extended_palette().primary.strong.color;
        let border = if selected {
            Border {
                color: accent,
                width: sizing::THUMBNAIL_SELECTED_BORDER,
                radius: radius::SM.into(),
            }
        } else if matches!(status, button::Status::Hovered) {
            Border {
                color: palette::GRAY_200,
                width: 1.0,
                radius: radius::SM.into(),
            }
        } else {
            Border {
                radius: radius::SM.into(),
                ..Border::default()
            }
        };

        button::Style {
            background: None,
            text_color: palette::WHITE,
            border,
            shadow: if selected { shadow::MD } else { shadow::NONE },
            ..button::Style::default()
        }
    }
}
