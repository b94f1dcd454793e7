// SPDX-License-Identifier: MPL-2.0
//! Stateful front for the pure gallery transitions.
//!
//! [`GalleryController`] owns the single [`GalleryState`] of a gallery and the
//! title source of its items. Each command threads the state through the
//! matching transition function and hands the resulting effects back to the
//! caller, who is responsible for applying them to a surface.

use super::effect::RenderEffects;
use super::input::Command;
use super::state::GalleryState;
use super::title::TitleSource;
use super::transition::{self, Direction};
use crate::error::GalleryError;

#[derive(Debug, Clone)]
pub struct GalleryController<T> {
    state: GalleryState,
    titles: T,
}

impl<T: TitleSource> GalleryController<T> {
    /// Builds a controller for every item of `titles`.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::InvalidConfiguration`] when `titles` is empty.
    pub fn new(titles: T) -> Result<Self, GalleryError> {
        let state = transition::initialize(titles.len())?;
        tracing::debug!(item_count = titles.len(), "gallery initialized");
        Ok(Self { state, titles })
    }

    #[must_use]
    pub fn state(&self) -> GalleryState {
        self.state
    }

    #[must_use]
    pub fn titles(&self) -> &T {
        &self.titles
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.state.item_count().get()
    }

    #[must_use]
    pub fn is_full_screen(&self) -> bool {
        self.state.is_full_screen()
    }

    /// Title of the image currently shown.
    #[must_use]
    pub fn current_title(&self) -> String {
        self.titles.title_of(self.state.current_index())
    }

    /// Effects for a surface that has never been synchronized.
    #[must_use]
    pub fn initial_effects(&self) -> RenderEffects {
        transition::initial_effects(self.state, &self.titles)
    }

    /// Shows the item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::IndexOutOfRange`] for an index past the last item;
    /// the state is left untouched.
    pub fn select_index(&mut self, index: usize) -> Result<RenderEffects, GalleryError> {
        let (state, effects) = transition::select_index(self.state, index, &self.titles)?;
        Ok(self.commit(state, effects))
    }

    pub fn advance(&mut self, direction: Direction) -> RenderEffects {
        let (state, effects) = transition::advance(self.state, direction, &self.titles);
        self.commit(state, effects)
    }

    pub fn next(&mut self) -> RenderEffects {
        self.advance(Direction::Next)
    }

    pub fn previous(&mut self) -> RenderEffects {
        self.advance(Direction::Previous)
    }

    pub fn toggle_full_screen(&mut self) -> RenderEffects {
        let (state, effects) = transition::toggle_full_screen(self.state);
        self.commit(state, effects)
    }

    /// Runs an input command.
    ///
    /// # Errors
    ///
    /// Only [`Command::Select`] can fail, see [`GalleryController::select_index`].
    pub fn execute(&mut self, command: Command) -> Result<RenderEffects, GalleryError> {
        match command {
            Command::Advance(direction) => Ok(self.advance(direction)),
            Command::Select(index) => self.select_index(index),
            Command::ToggleFullScreen => Ok(self.toggle_full_screen()),
        }
    }

    fn commit(&mut self, state: GalleryState, effects: RenderEffects) -> RenderEffects {
        if state != self.state {
            tracing::debug!(
                from = self.state.current_index(),
                to = state.current_index(),
                full_screen = state.is_full_screen(),
                effects = effects.len(),
                "gallery transition"
            );
        }
        self.state = state;
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::effect::RenderEffect;

    fn controller() -> GalleryController<Vec<&'static str>> {
        GalleryController::new(vec!["dunes", "fjord", "glacier"]).expect("non-empty gallery")
    }

    #[test]
    fn empty_title_source_is_rejected() {
        let result = GalleryController::new(Vec::<String>::new());
        assert!(matches!(
            result,
            Err(GalleryError::InvalidConfiguration { item_count: 0 })
        ));
    }

    #[test]
    fn next_and_previous_update_owned_state() {
        let mut gallery = controller();
        gallery.next();
        assert_eq!(gallery.current_index(), 1);
        assert_eq!(gallery.current_title(), "fjord");
        gallery.previous();
        gallery.previous();
        assert_eq!(gallery.current_index(), 2);
    }

    #[test]
    fn failed_selection_leaves_state_untouched() {
        let mut gallery = controller();
        gallery.next();
        let before = gallery.state();
        assert!(gallery.select_index(7).is_err());
        assert_eq!(gallery.state(), before);
    }

    #[test]
    fn execute_dispatches_commands() {
        let mut gallery = controller();
        let effects = gallery
            .execute(Command::Select(2))
            .expect("index in range");
        assert!(effects.contains(&RenderEffect::SetTitle("glacier".to_string())));

        gallery
            .execute(Command::ToggleFullScreen)
            .expect("toggle cannot fail");
        assert!(gallery.is_full_screen());

        gallery
            .execute(Command::Advance(Direction::Next))
            .expect("advance cannot fail");
        assert_eq!(gallery.current_index(), 0);
        assert!(gallery.is_full_screen());
    }

    #[test]
    fn toggle_keeps_current_index() {
        let mut gallery = controller();
        gallery.next();
        gallery.toggle_full_screen();
        assert_eq!(gallery.current_index(), 1);
        assert!(gallery.is_full_screen());
    }
}
