// SPDX-License-Identifier: MPL-2.0
//! Empty state view displayed when the chosen folder holds no images.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    OpenFolderRequested,
}

/// Renders the empty state, with a button opening the folder dialog.
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("empty-gallery-title"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let hint = Text::new(i18n.tr("empty-gallery-hint"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let open_button = button(Text::new(i18n.tr("open-folder-button")))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button_primary)
        .on_press(Message::OpenFolderRequested);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(hint)
        .push(open_button);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
