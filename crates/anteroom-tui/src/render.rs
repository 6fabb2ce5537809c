//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a
//! ratatui Frame, and never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::features::{login, verify};
use crate::state::{AppState, Readiness, Screen};

/// Width of the centered login card.
const CARD_WIDTH: u16 = 64;

/// Height of the centered login card.
const CARD_HEIGHT: u16 = 20;

/// Spinner frames for the readiness gate.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let card = card_area(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, card);

    let inner = Rect::new(
        card.x + 2,
        card.y + 1,
        card.width.saturating_sub(4),
        card.height.saturating_sub(2),
    );

    // The footer claims the card's bottom line; the screens render into
    // the rows above it.
    let footer = &app.tui.branding.footer_text;
    let body = if footer.is_empty() {
        inner
    } else {
        render_footer(frame, inner, footer);
        Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1))
    };

    match app.tui.readiness {
        Readiness::Waiting => render_waiting(frame, app, body),
        Readiness::Failed => render_failed(frame, app, body),
        Readiness::Ready => match app.tui.screen {
            Screen::Normal => login::render(frame, &app.tui, body),
            Screen::EmailVerify | Screen::SmsVerify => verify::render(frame, &app.tui, body),
        },
    }

    // Overlays render last so they sit on top.
    if let Some(overlay) = app.overlay.as_ref() {
        overlay.render(frame, area);
    }
}

fn render_footer(frame: &mut Frame, inner: Rect, text: &str) {
    if inner.height < 2 {
        return;
    }
    let footer_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    let line = Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), footer_area);
}

fn card_area(area: Rect) -> Rect {
    let width = CARD_WIDTH.min(area.width.saturating_sub(2));
    let height = CARD_HEIGHT.min(area.height.saturating_sub(1));
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn render_waiting(frame: &mut Frame, app: &AppState, area: Rect) {
    let spinner = SPINNER_FRAMES[app.tui.spinner_frame % SPINNER_FRAMES.len()];
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            app.tui.branding.app_name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{spinner} Connecting to the sign-in service..."),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Esc quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_failed(frame: &mut Frame, app: &AppState, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            app.tui.branding.app_name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    if let Some(error) = app.tui.error.as_deref() {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "r retry • Esc quit",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
