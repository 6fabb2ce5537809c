//! Country picker overlay for the phone input.
//!
//! A searchable list over the static country dataset. The query filters
//! by name, ISO code, or dial code; Enter selects, Esc dismisses and the
//! query is discarded with the overlay (reopening starts clean).

use anteroom_core::countries::{self, Country};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::render_utils::{
    InputHint, InputLine, OverlayConfig, render_input_line, render_overlay, render_separator,
};
use super::OverlayUpdate;
use crate::common::truncate_with_ellipsis;
use crate::mutations::StateMutation;
use crate::state::TuiState;

/// Rows of the list visible at once.
const MAX_VISIBLE_COUNTRIES: usize = 8;

#[derive(Debug, Default)]
pub struct CountryPickerState {
    pub query: String,
    pub selected: usize,
    pub offset: usize,
}

impl CountryPickerState {
    pub fn open() -> Self {
        Self::default()
    }

    /// Countries matching the current query, in dataset order.
    pub fn visible(&self) -> Vec<&'static Country> {
        countries::filter(&self.query)
    }

    pub fn selected_country(&self) -> Option<&'static Country> {
        self.visible().get(self.selected).copied()
    }

    pub fn handle_key(&mut self, _tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => OverlayUpdate::close(),
            KeyCode::Char('c') if ctrl => OverlayUpdate::close(),
            KeyCode::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                    if self.selected < self.offset {
                        self.offset = self.selected;
                    }
                }
                OverlayUpdate::stay()
            }
            KeyCode::Down => {
                let total = self.visible().len();
                if self.selected + 1 < total {
                    self.selected += 1;
                    if self.selected >= self.offset + MAX_VISIBLE_COUNTRIES {
                        self.offset = self.selected + 1 - MAX_VISIBLE_COUNTRIES;
                    }
                }
                OverlayUpdate::stay()
            }
            KeyCode::Enter => match self.selected_country() {
                Some(country) => OverlayUpdate::close()
                    .with_mutations(vec![StateMutation::SelectCountry(country)]),
                None => OverlayUpdate::close(),
            },
            // Ctrl+U: clear the query
            KeyCode::Char('u') if ctrl => {
                self.query.clear();
                self.clamp_selection();
                OverlayUpdate::stay()
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.clamp_selection();
                OverlayUpdate::stay()
            }
            KeyCode::Char(c) if !ctrl => {
                self.query.push(c);
                self.clamp_selection();
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }

    /// Clamps selection and scroll offset after the filter changes.
    fn clamp_selection(&mut self) {
        let count = self.visible().len();
        if count == 0 {
            self.selected = 0;
            self.offset = 0;
            return;
        }
        if self.selected >= count {
            self.selected = count - 1;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + MAX_VISIBLE_COUNTRIES {
            self.offset = self.selected + 1 - MAX_VISIBLE_COUNTRIES;
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let hints = [
            InputHint::new("↑↓", "navigate"),
            InputHint::new("enter", "select"),
            InputHint::new("esc", "close"),
        ];
        let config = OverlayConfig {
            title: "Select country",
            border_color: Color::Cyan,
            width: 44,
            height: (MAX_VISIBLE_COUNTRIES as u16) + 5,
            hints: &hints,
        };
        let layout = render_overlay(frame, area, &config);
        let body = layout.body;
        if body.height < 2 {
            return;
        }

        let input_area = Rect::new(body.x, body.y, body.width, 1);
        render_input_line(
            frame,
            input_area,
            &InputLine {
                value: &self.query,
                placeholder: Some("Search countries..."),
                prompt: "> ",
                prompt_color: Color::Cyan,
                text_color: Color::White,
                placeholder_color: Color::DarkGray,
                cursor_color: Color::Cyan,
            },
        );
        render_separator(frame, body, 1);

        let list_y = body.y + 2;
        let list_height = body.height.saturating_sub(2) as usize;
        let visible = self.visible();

        if visible.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No countries found",
                Style::default().fg(Color::DarkGray),
            )));
            frame.render_widget(empty, Rect::new(body.x, list_y, body.width, 1));
            return;
        }

        let rows = visible
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(list_height.min(MAX_VISIBLE_COUNTRIES));
        for (row, (index, country)) in rows.enumerate() {
            let y = list_y + row as u16;
            let is_selected = index == self.selected;
            let name_width = (body.width as usize).saturating_sub(12);
            let name = truncate_with_ellipsis(country.name, name_width);

            let style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let dial_style = if is_selected {
                style
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let line = Line::from(vec![
                Span::styled(format!(" {} ", country.flag), style),
                Span::styled(format!("{name:<width$}", width = name_width), style),
                Span::styled(format!("{:>6} ", country.dial_code), dial_style),
            ]);
            frame.render_widget(Paragraph::new(line), Rect::new(body.x, y, body.width, 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use anteroom_core::config::Config;
    use crossterm::event::{KeyCode, KeyEvent};

    use super::*;
    use crate::overlays::OverlayTransition;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn tui() -> TuiState {
        TuiState::new(&Config::default())
    }

    #[test]
    fn test_typing_filters_and_enter_selects() {
        let tui = tui();
        let mut picker = CountryPickerState::open();
        for c in "germ".chars() {
            picker.handle_key(&tui, key(KeyCode::Char(c)));
        }
        assert_eq!(picker.visible().len(), 1);

        let update = picker.handle_key(&tui, key(KeyCode::Enter));
        assert!(matches!(update.transition, OverlayTransition::Close));
        match update.mutations.as_slice() {
            [StateMutation::SelectCountry(country)] => assert_eq!(country.code, "DE"),
            other => panic!("unexpected mutations: {other:?}"),
        }
    }

    #[test]
    fn test_esc_closes_without_selection() {
        let tui = tui();
        let mut picker = CountryPickerState::open();
        picker.handle_key(&tui, key(KeyCode::Char('x')));
        let update = picker.handle_key(&tui, key(KeyCode::Esc));
        assert!(matches!(update.transition, OverlayTransition::Close));
        assert!(update.mutations.is_empty());
    }

    #[test]
    fn test_selection_clamps_when_filter_narrows() {
        let tui = tui();
        let mut picker = CountryPickerState::open();
        for _ in 0..20 {
            picker.handle_key(&tui, key(KeyCode::Down));
        }
        assert_eq!(picker.selected, 20);

        picker.handle_key(&tui, key(KeyCode::Char('j')));
        picker.handle_key(&tui, key(KeyCode::Char('p')));
        // "jp" matches only Japan
        assert_eq!(picker.visible().len(), 1);
        assert_eq!(picker.selected, 0);
    }

    #[test]
    fn test_enter_with_no_matches_closes_cleanly() {
        let tui = tui();
        let mut picker = CountryPickerState::open();
        for c in "zzzz".chars() {
            picker.handle_key(&tui, key(KeyCode::Char(c)));
        }
        assert!(picker.visible().is_empty());
        let update = picker.handle_key(&tui, key(KeyCode::Enter));
        assert!(matches!(update.transition, OverlayTransition::Close));
        assert!(update.mutations.is_empty());
    }

    #[test]
    fn test_scroll_offset_follows_selection() {
        let tui = tui();
        let mut picker = CountryPickerState::open();
        for _ in 0..10 {
            picker.handle_key(&tui, key(KeyCode::Down));
        }
        assert_eq!(picker.selected, 10);
        assert_eq!(picker.offset, 3);
        for _ in 0..10 {
            picker.handle_key(&tui, key(KeyCode::Up));
        }
        assert_eq!(picker.selected, 0);
        assert_eq!(picker.offset, 0);
    }
}
