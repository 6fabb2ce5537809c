//! Verification screen view.
//!
//! Six code cells, the destination the code went to, and the resend
//! countdown.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{Channel, OTP_LEN};
use crate::state::TuiState;

/// Renders a verification screen into `area`.
pub fn render(frame: &mut Frame, tui: &TuiState, area: Rect) {
    let channel = Channel::of(tui.screen);
    let mut lines = vec![
        Line::from(Span::styled(
            title(channel),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            destination(channel, tui),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        code_cells_line(channel.otp(tui)),
        Line::from(""),
        resend_line(tui.cooldown),
    ];

    if let Some(error) = tui.error.as_deref() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
    }

    if tui.is_busy() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Verifying...",
            Style::default().fg(Color::Yellow),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter verify • Esc back",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn title(channel: Channel) -> &'static str {
    match channel {
        Channel::Email => "Verify your email",
        Channel::Sms => "Verify your phone",
    }
}

fn destination(channel: Channel, tui: &TuiState) -> String {
    match channel {
        Channel::Email => format!("We sent a code to {}", tui.email),
        Channel::Sms => format!("We sent a code to {}", tui.phone.display_full()),
    }
}

fn code_cells_line(otp: &str) -> Line<'static> {
    let mut spans = Vec::new();
    for i in 0..OTP_LEN {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        match otp.as_bytes().get(i) {
            Some(b) => spans.push(Span::styled(
                format!("[{}]", *b as char),
                Style::default().fg(Color::White),
            )),
            None => spans.push(Span::styled("[ ]", Style::default().fg(Color::DarkGray))),
        }
    }
    Line::from(spans)
}

fn resend_line(cooldown: u8) -> Line<'static> {
    if cooldown > 0 {
        Line::from(Span::styled(
            format!("Resend available in {cooldown}s"),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::styled("r", Style::default().fg(Color::Cyan)),
            Span::styled(" resend code", Style::default().fg(Color::DarkGray)),
        ])
    }
}
