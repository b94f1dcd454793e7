// SPDX-License-Identifier: MPL-2.0
//! Presentation model the gallery effects are applied to.
//!
//! A [`Surface`] holds one slot per image (shown or hidden, thumbnail selected
//! or not) plus the page-level slots: title text, full-screen presentation,
//! chrome visibility and backdrop. The iced view draws whatever the surface
//! says; it never reads the gallery state directly.

use crate::gallery::{Backdrop, RenderEffect};

/// Per-image slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSlot {
    pub visible: bool,
    pub thumbnail_selected: bool,
}

impl Default for ItemSlot {
    // Freshly built markup shows every image and highlights nothing.
    fn default() -> Self {
        Self {
            visible: true,
            thumbnail_selected: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    slots: Vec<ItemSlot>,
    title: String,
    full_screen_presentation: bool,
    chrome_visible: bool,
    backdrop: Backdrop,
}

impl Surface {
    /// Unsynchronized surface for `item_count` images.
    #[must_use]
    pub fn new(item_count: usize) -> Self {
        Self {
            slots: vec![ItemSlot::default(); item_count],
            title: String::new(),
            full_screen_presentation: false,
            chrome_visible: true,
            backdrop: Backdrop::Default,
        }
    }

    /// Applies effects in order. Applying an effect twice has no further effect.
    pub fn apply(&mut self, effects: &[RenderEffect]) {
        for effect in effects {
            self.apply_one(effect);
        }
    }

    pub fn apply_one(&mut self, effect: &RenderEffect) {
        match effect {
            RenderEffect::ShowItem(index) => {
                if let Some(slot) = self.slot_mut(*index) {
                    slot.visible = true;
                }
            }
            RenderEffect::HideItem(index) => {
                if let Some(slot) = self.slot_mut(*index) {
                    slot.visible = false;
                }
            }
            RenderEffect::SetThumbnailSelected { index, selected } => {
                if let Some(slot) = self.slot_mut(*index) {
                    slot.thumbnail_selected = *selected;
                }
            }
            RenderEffect::SetTitle(text) => self.title.clone_from(text),
            RenderEffect::SetFullScreenPresentation(active) => {
                self.full_screen_presentation = *active;
            }
            RenderEffect::SetChromeVisible(visible) => self.chrome_visible = *visible,
            RenderEffect::SetBackdrop(backdrop) => self.backdrop = *backdrop,
        }
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut ItemSlot> {
        let len = self.slots.len();
        let slot = self.slots.get_mut(index);
        if slot.is_none() {
            tracing::warn!(index, len, "render effect addresses a missing slot");
        }
        slot
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn slot(&self, index: usize) -> Option<ItemSlot> {
        self.slots.get(index).copied()
    }

    pub fn slots(&self) -> impl Iterator<Item = (usize, ItemSlot)> + '_ {
        self.slots.iter().copied().enumerate()
    }

    /// Indices of the images currently shown.
    pub fn visible_items(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots()
            .filter(|(_, slot)| slot.visible)
            .map(|(index, _)| index)
    }

    /// Indices of the highlighted thumbnails.
    pub fn selected_thumbnails(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots()
            .filter(|(_, slot)| slot.thumbnail_selected)
            .map(|(index, _)| index)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn is_full_screen_presentation(&self) -> bool {
        self.full_screen_presentation
    }

    #[must_use]
    pub fn is_chrome_visible(&self) -> bool {
        self.chrome_visible
    }

    #[must_use]
    pub fn backdrop(&self) -> Backdrop {
        self.backdrop
    }
}
