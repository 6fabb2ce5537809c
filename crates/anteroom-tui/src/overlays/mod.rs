//! Overlay modules for the TUI.
//!
//! Overlays are modal components that temporarily take over keyboard
//! input. Each overlay owns its state, key handler, and render function.
//! The login flow has one: the country picker for the phone input.

pub mod country_picker;
pub mod render_utils;

pub use country_picker::CountryPickerState;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::state::TuiState;

/// Requests to open a new overlay.
#[derive(Debug)]
pub enum OverlayRequest {
    CountryPicker,
}

/// Transition returned by overlay key handlers.
#[derive(Debug)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub mutations: Vec<StateMutation>,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            mutations: Vec::new(),
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(OverlayTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(OverlayTransition::Close)
    }

    #[must_use]
    pub fn with_mutations(mut self, mutations: Vec<StateMutation>) -> Self {
        self.mutations = mutations;
        self
    }
}

#[derive(Debug)]
pub enum Overlay {
    CountryPicker(CountryPickerState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            Overlay::CountryPicker(p) => p.render(frame, area),
        }
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::CountryPicker(p) => p.handle_key(tui, key),
        }
    }
}
