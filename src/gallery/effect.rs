// SPDX-License-Identifier: MPL-2.0
//! Declarative render effects emitted by gallery transitions.
//!
//! The core never touches a presentation surface. It describes the changes a
//! rendering adapter has to make, in the order they should be applied.

/// Page background used behind the current image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backdrop {
    #[default]
    Default,
    Black,
}

impl Backdrop {
    /// Backdrop matching a presentation mode.
    #[must_use]
    pub fn for_full_screen(active: bool) -> Self {
        if active {
            Backdrop::Black
        } else {
            Backdrop::Default
        }
    }
}

/// One presentation change, addressed to a named slot of the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEffect {
    ShowItem(usize),
    HideItem(usize),
    SetThumbnailSelected { index: usize, selected: bool },
    SetTitle(String),
    /// Switches the shown item between windowed and full-screen presentation.
    SetFullScreenPresentation(bool),
    /// Title bar, arrows and thumbnail strip.
    SetChromeVisible(bool),
    SetBackdrop(Backdrop),
}

impl RenderEffect {
    /// The effect that undoes this one.
    ///
    /// `SetTitle` has no inverse: the previous text is not part of the record.
    #[must_use]
    pub fn inverse(&self) -> Option<RenderEffect> {
        match self {
            RenderEffect::ShowItem(index) => Some(RenderEffect::HideItem(*index)),
            RenderEffect::HideItem(index) => Some(RenderEffect::ShowItem(*index)),
            RenderEffect::SetThumbnailSelected { index, selected } => {
                Some(RenderEffect::SetThumbnailSelected {
                    index: *index,
                    selected: !selected,
                })
            }
            RenderEffect::SetTitle(_) => None,
            RenderEffect::SetFullScreenPresentation(active) => {
                Some(RenderEffect::SetFullScreenPresentation(!active))
            }
            RenderEffect::SetChromeVisible(visible) => {
                Some(RenderEffect::SetChromeVisible(!visible))
            }
            RenderEffect::SetBackdrop(backdrop) => Some(RenderEffect::SetBackdrop(match backdrop {
                Backdrop::Default => Backdrop::Black,
                Backdrop::Black => Backdrop::Default,
            })),
        }
    }
}

/// Ordered effect list produced by a single transition.
pub type RenderEffects = Vec<RenderEffect>;

/// Effects switching the whole page between windowed and full-screen mode.
pub(crate) fn presentation_effects(full_screen: bool) -> RenderEffects {
    vec![
        RenderEffect::SetFullScreenPresentation(full_screen),
        RenderEffect::SetBackdrop(Backdrop::for_full_screen(full_screen)),
        RenderEffect::SetChromeVisible(!full_screen),
    ]
}
