// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: title bar, main image with arrows, thumbnail strip.
//!
//! Everything drawn here comes from the [`Surface`]; pointer input is emitted
//! as [`PointerTarget`] and turned into commands by the application.

use crate::directory_scanner::ImageList;
use crate::gallery::PointerTarget;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::styles;
use crate::ui::surface::Surface;
use iced::widget::image::{self, Image};
use iced::widget::scrollable::{self, Scrollable, Scrollbar};
use iced::widget::{button, mouse_area, tooltip, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub surface: &'a Surface,
    pub images: &'a ImageList,
    pub i18n: &'a I18n,
    pub current_index: usize,
    pub thumbnail_size: u32,
    /// Key bound to the full-screen toggle, shown in the hint.
    pub toggle_key: char,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, PointerTarget> {
    let chrome = ctx.surface.is_chrome_visible();

    let mut page = Column::new().width(Length::Fill).height(Length::Fill);

    if chrome {
        page = page.push(title_bar(&ctx));
    }

    page = page.push(stage(&ctx));

    if chrome {
        page = page.push(thumbnail_strip(&ctx));
    } else {
        page = page.push(
            Container::new(
                Text::new(full_screen_hint(ctx.i18n, ctx.toggle_key))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .width(Length::Fill)
            .padding(spacing::XXS)
            .align_x(alignment::Horizontal::Center),
        );
    }

    Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop(ctx.surface.backdrop()))
        .into()
}

fn title_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, PointerTarget> {
    let title = Text::new(ctx.surface.title().to_owned()).size(typography::TITLE_LG);

    let current = (ctx.current_index + 1).to_string();
    let total = ctx.surface.len().to_string();
    let position = Text::new(ctx.i18n.tr_with_args(
        "gallery-position",
        &[("current", current.as_str()), ("total", total.as_str())],
    ))
    .size(typography::BODY)
    .color(palette::GRAY_400);

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(title)
            .push(position),
    )
    .width(Length::Fill)
    .padding([spacing::SM, spacing::LG])
    .into()
}

fn full_screen_hint(i18n: &I18n, toggle_key: char) -> String {
    let key = toggle_key.to_uppercase().to_string();
    i18n.tr_with_args("full-screen-hint", &[("key", key.as_str())])
}

/// Main image area, flanked by the previous/next arrows while the chrome is
/// visible. In full screen the image takes the whole stage.
fn stage<'a>(ctx: &ViewContext<'a>) -> Element<'a, PointerTarget> {
    let mut shown = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    for index in ctx.surface.visible_items() {
        if let Some(path) = ctx.images.get(index) {
            shown = shown.push(
                Image::new(image::Handle::from_path(path))
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fill),
            );
        }
    }

    let main_image = mouse_area(shown).on_release(PointerTarget::MainImage);

    let gap = if ctx.surface.is_full_screen_presentation() {
        0.0
    } else {
        spacing::XS
    };

    let row = Row::new()
        .spacing(gap)
        .padding(gap)
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill)
        .height(Length::Fill);

    if ctx.surface.is_chrome_visible() {
        row.push(arrow(ctx.i18n, "‹", PointerTarget::PreviousArrow))
            .push(main_image)
            .push(arrow(ctx.i18n, "›", PointerTarget::NextArrow))
            .into()
    } else {
        row.push(main_image).into()
    }
}

fn arrow<'a>(i18n: &I18n, glyph: &'a str, target: PointerTarget) -> Element<'a, PointerTarget> {
    let label = match target {
        PointerTarget::PreviousArrow => i18n.tr("previous-image"),
        _ => i18n.tr("next-image"),
    };

    let arrow_button = button(Text::new(glyph).size(typography::TITLE_LG))
        .padding([spacing::SM, spacing::XS])
        .style(styles::button_overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(target);

    tooltip(
        arrow_button,
        Container::new(Text::new(label).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(styles::container::thumbnail_strip),
        tooltip::Position::Bottom,
    )
    .into()
}

fn thumbnail_strip<'a>(ctx: &ViewContext<'a>) -> Element<'a, PointerTarget> {
    let size = ctx.thumbnail_size as f32;

    let thumbnails = ctx
        .surface
        .slots()
        .filter_map(|(index, slot)| {
            let path = ctx.images.get(index)?;
            let alpha = if slot.thumbnail_selected {
                opacity::OPAQUE
            } else {
                opacity::THUMBNAIL_IDLE
            };

            let thumbnail = Image::new(image::Handle::from_path(path))
                .content_fit(ContentFit::Cover)
                .width(Length::Fixed(size))
                .height(Length::Fixed(size))
                .opacity(alpha);

            Some(
                button(thumbnail)
                    .padding(spacing::XXS)
                    .style(styles::button::thumbnail(slot.thumbnail_selected))
                    .on_press(PointerTarget::Thumbnail(index))
                    .into(),
            )
        })
        .collect::<Vec<Element<'a, PointerTarget>>>();

    let row = Row::with_children(thumbnails)
        .spacing(spacing::XS)
        .padding(spacing::XS);

    Container::new(
        Scrollable::new(row)
            .direction(scrollable::Direction::Horizontal(Scrollbar::new()))
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .style(styles::container::thumbnail_strip)
    .into()
}
