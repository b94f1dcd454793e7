// SPDX-License-Identifier: MPL-2.0
//! Pure state transitions of the gallery.
//!
//! Every function takes the current [`GalleryState`] by value and returns the
//! next one together with the [`RenderEffects`] needed to bring a surface from
//! the old state to the new one. Nothing here touches global or shared state.

use super::effect::{presentation_effects, RenderEffect, RenderEffects};
use super::state::{GalleryState, ItemCount};
use super::title::TitleSource;
use crate::error::GalleryError;

/// Direction of a relative navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// A state paired with the effects that lead to it.
pub type Transition = (GalleryState, RenderEffects);

/// Creates the initial state for `item_count` discovered items.
///
/// # Errors
///
/// Returns [`GalleryError::InvalidConfiguration`] when the count is zero or negative.
pub fn initialize<N>(item_count: N) -> Result<GalleryState, GalleryError>
where
    N: TryInto<ItemCount, Error = GalleryError>,
{
    Ok(GalleryState::new(item_count.try_into()?))
}

/// Moves to `new_index`.
///
/// Selecting the current index is a no-op with no effects.
///
/// # Errors
///
/// Returns [`GalleryError::IndexOutOfRange`] when `new_index >= item_count`.
pub fn select_index<T>(
    state: GalleryState,
    new_index: usize,
    titles: &T,
) -> Result<Transition, GalleryError>
where
    T: TitleSource + ?Sized,
{
    let item_count = state.item_count();
    if !item_count.contains(new_index) {
        return Err(GalleryError::IndexOutOfRange {
            index: new_index,
            item_count: item_count.get(),
        });
    }

    let previous = state.current_index();
    if new_index == previous {
        return Ok((state, RenderEffects::new()));
    }

    let next = state.at_index(new_index);
    let mut effects = vec![
        RenderEffect::HideItem(previous),
        RenderEffect::ShowItem(new_index),
        RenderEffect::SetThumbnailSelected {
            index: previous,
            selected: false,
        },
        RenderEffect::SetThumbnailSelected {
            index: new_index,
            selected: true,
        },
        RenderEffect::SetTitle(titles.title_of(new_index)),
    ];

    // The windowed presentation is the surface default; only the full-screen
    // one has to follow the newly shown item.
    if next.is_full_screen() {
        effects.push(RenderEffect::SetFullScreenPresentation(true));
    }

    Ok((next, effects))
}

/// Index reached from `current` after one step in `direction`, wrapping at both ends.
#[must_use]
pub fn wrapped_index(current: usize, direction: Direction, item_count: ItemCount) -> usize {
    let count = item_count.get();
    match direction {
        Direction::Next => (current + 1) % count,
        Direction::Previous => (current + count - 1) % count,
    }
}

/// Steps one item forward or backward with wrap-around.
///
/// With a single item this always lands on index 0, the no-op path.
pub fn advance<T>(state: GalleryState, direction: Direction, titles: &T) -> Transition
where
    T: TitleSource + ?Sized,
{
    let new_index = wrapped_index(state.current_index(), direction, state.item_count());
    match select_index(state, new_index, titles) {
        Ok(transition) => transition,
        // wrapped_index stays below item_count
        Err(_) => (state, RenderEffects::new()),
    }
}

/// Flips between windowed and full-screen presentation of the current item.
#[must_use]
pub fn toggle_full_screen(state: GalleryState) -> Transition {
    let active = !state.is_full_screen();
    (state.with_full_screen(active), presentation_effects(active))
}

/// Effects bringing a freshly built surface in sync with `state`.
pub fn initial_effects<T>(state: GalleryState, titles: &T) -> RenderEffects
where
    T: TitleSource + ?Sized,
{
    let current = state.current_index();
    let count = state.item_count().get();
    let mut effects = RenderEffects::with_capacity(count * 2 + 4);

    for index in 0..count {
        effects.push(if index == current {
            RenderEffect::ShowItem(index)
        } else {
            RenderEffect::HideItem(index)
        });
    }
    for index in 0..count {
        effects.push(RenderEffect::SetThumbnailSelected {
            index,
            selected: index == current,
        });
    }
    effects.push(RenderEffect::SetTitle(titles.title_of(current)));
    effects.extend(presentation_effects(state.is_full_screen()));
    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::effect::Backdrop;

    const TITLES: [&str; 3] = ["first", "second", "third"];

    fn state_of(count: usize) -> GalleryState {
        initialize(count).expect("valid count")
    }

    #[test]
    fn initialize_rejects_zero_and_negative_counts() {
        assert_eq!(
            initialize(0),
            Err(GalleryError::InvalidConfiguration { item_count: 0 })
        );
        assert_eq!(
            initialize(-1),
            Err(GalleryError::InvalidConfiguration { item_count: -1 })
        );
    }

    #[test]
    fn initialize_starts_at_zero_windowed() {
        let state = initialize(3).expect("valid count");
        assert_eq!(state.current_index(), 0);
        assert!(!state.is_full_screen());
    }

    #[test]
    fn next_produces_the_documented_effects() {
        let (state, effects) = advance(state_of(3), Direction::Next, &TITLES[..]);
        assert_eq!(state.current_index(), 1);
        assert_eq!(
            effects,
            vec![
                RenderEffect::HideItem(0),
                RenderEffect::ShowItem(1),
                RenderEffect::SetThumbnailSelected {
                    index: 0,
                    selected: false
                },
                RenderEffect::SetThumbnailSelected {
                    index: 1,
                    selected: true
                },
                RenderEffect::SetTitle("second".to_string()),
            ]
        );
    }

    #[test]
    fn three_next_steps_wrap_back_to_start() {
        let (state, _) = advance(state_of(3), Direction::Next, &TITLES[..]);
        let (state, _) = advance(state, Direction::Next, &TITLES[..]);
        assert_eq!(state.current_index(), 2);
        let (state, effects) = advance(state, Direction::Next, &TITLES[..]);
        assert_eq!(state.current_index(), 0);
        assert_eq!(effects[4], RenderEffect::SetTitle("first".to_string()));
    }

    #[test]
    fn full_cycle_returns_to_initial_index_for_any_count() {
        for count in 1..=12_usize {
            let titles: Vec<String> = (0..count).map(|i| format!("image {i}")).collect();
            for start in 0..count {
                let (mut state, _) =
                    select_index(state_of(count), start, &titles).expect("in range");
                for _ in 0..count {
                    state = advance(state, Direction::Next, &titles).0;
                }
                assert_eq!(state.current_index(), start, "count {count}, start {start}");
            }
        }
    }

    #[test]
    fn previous_from_first_goes_to_last() {
        let (state, _) = advance(state_of(3), Direction::Previous, &TITLES[..]);
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn next_from_last_goes_to_first() {
        let (state, _) = select_index(state_of(3), 2, &TITLES[..]).expect("in range");
        let (state, _) = advance(state, Direction::Next, &TITLES[..]);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn single_item_gallery_never_moves() {
        let titles = ["only"];
        let state = state_of(1);

        let (after_next, next_effects) = advance(state, Direction::Next, &titles[..]);
        let (after_prev, prev_effects) = advance(state, Direction::Previous, &titles[..]);

        assert_eq!(after_next, state);
        assert_eq!(after_prev, state);
        assert!(next_effects.is_empty());
        assert!(prev_effects.is_empty());
    }

    #[test]
    fn selecting_current_index_is_a_no_op() {
        let (state, _) = select_index(state_of(3), 1, &TITLES[..]).expect("in range");
        let (same, effects) = select_index(state, 1, &TITLES[..]).expect("in range");
        assert_eq!(same, state);
        assert!(effects.is_empty());
    }

    #[test]
    fn selecting_past_the_end_fails() {
        assert_eq!(
            select_index(state_of(3), 3, &TITLES[..]),
            Err(GalleryError::IndexOutOfRange {
                index: 3,
                item_count: 3
            })
        );
    }

    #[test]
    fn navigation_in_full_screen_keeps_full_screen_presentation() {
        let (state, _) = toggle_full_screen(state_of(3));
        let (state, effects) = advance(state, Direction::Next, &TITLES[..]);
        assert!(state.is_full_screen());
        assert_eq!(
            effects.last(),
            Some(&RenderEffect::SetFullScreenPresentation(true))
        );
    }

    #[test]
    fn toggle_twice_restores_flag_with_inverse_effects() {
        let initial = state_of(3);
        let (entered, enter_effects) = toggle_full_screen(initial);
        let (left, leave_effects) = toggle_full_screen(entered);

        assert!(entered.is_full_screen());
        assert_eq!(left, initial);
        assert_eq!(enter_effects.len(), leave_effects.len());
        for (enter, leave) in enter_effects.iter().zip(&leave_effects) {
            assert_eq!(enter.inverse().as_ref(), Some(leave));
        }
    }

    #[test]
    fn toggle_does_not_depend_on_current_index() {
        let (moved, _) = select_index(state_of(3), 2, &TITLES[..]).expect("in range");
        let (_, at_zero) = toggle_full_screen(state_of(3));
        let (toggled, at_two) = toggle_full_screen(moved);
        assert_eq!(at_zero, at_two);
        assert_eq!(toggled.current_index(), 2);
    }

    #[test]
    fn initial_effects_show_only_the_current_item() {
        let effects = initial_effects(state_of(3), &TITLES[..]);
        let shown: Vec<_> = effects
            .iter()
            .filter_map(|effect| match effect {
                RenderEffect::ShowItem(index) => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(shown, vec![0]);
        assert!(effects.contains(&RenderEffect::SetTitle("first".to_string())));
        assert!(effects.contains(&RenderEffect::SetBackdrop(Backdrop::Default)));
    }

    #[test]
    fn wrapped_index_handles_both_ends() {
        let count = ItemCount::try_from(4_usize).expect("valid count");
        assert_eq!(wrapped_index(3, Direction::Next, count), 0);
        assert_eq!(wrapped_index(0, Direction::Previous, count), 3);
        assert_eq!(wrapped_index(1, Direction::Next, count), 2);
    }
}
