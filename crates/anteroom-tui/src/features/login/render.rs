//! Login screen view.
//!
//! Renders the method tabs and the active tab's body inside the card
//! area handed down by the top-level renderer.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::{QuickMethod, Tab, TuiState};

/// Renders the normal login screen into `area`.
pub fn render(frame: &mut Frame, tui: &TuiState, area: Rect) {
    let mut lines = Vec::new();

    lines.extend(branding_lines(tui));
    lines.push(Line::from(""));
    lines.push(tab_bar_line(tui.active_tab));
    lines.push(Line::from(""));

    match tui.active_tab {
        Tab::Quick => lines.extend(quick_tab_lines(tui)),
        Tab::Email => lines.extend(email_tab_lines(tui)),
        Tab::Phone => lines.extend(phone_tab_lines(tui)),
    }

    if let Some(error) = tui.error.as_deref() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
    }

    if tui.is_busy() {
        lines.push(Line::from(""));
        lines.push(busy_line(tui.spinner_frame));
    }

    lines.push(Line::from(""));
    lines.push(hints_line(tui.active_tab));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn branding_lines(tui: &TuiState) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            tui.branding.app_name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            tui.branding.tagline.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    if !tui.branding.features.is_empty() {
        lines.push(Line::from(""));
        for feature in &tui.branding.features {
            lines.push(Line::from(Span::styled(
                format!("• {feature}"),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    lines
}

fn tab_bar_line(active: Tab) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, tab) in Tab::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        let style = if *tab == active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(tab.title(), style));
    }
    Line::from(spans)
}

fn quick_tab_lines(tui: &TuiState) -> Vec<Line<'static>> {
    QuickMethod::all()
        .iter()
        .enumerate()
        .map(|(idx, method)| {
            let available = method.available(&tui.methods);
            let selected = idx == tui.quick_selected;
            let pointer = if selected { "> " } else { "  " };
            let style = if !available {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
            } else if selected {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };
            let suffix = if available { "" } else { "  (unavailable)" };
            Line::from(Span::styled(
                format!("{pointer}{}{suffix}", method.label()),
                style,
            ))
        })
        .collect()
}

fn email_tab_lines(tui: &TuiState) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Email address",
            Style::default().fg(Color::White),
        )),
        input_value_line(&tui.email, "you@example.com"),
    ]
}

fn phone_tab_lines(tui: &TuiState) -> Vec<Line<'static>> {
    let country = tui.phone.country();
    vec![
        Line::from(Span::styled(
            "Phone number",
            Style::default().fg(Color::White),
        )),
        Line::from(vec![
            Span::styled(
                format!("[{} {} {}] ", country.flag, country.code, country.dial_code),
                Style::default().fg(Color::Cyan),
            ),
            if tui.phone.is_empty() {
                Span::styled("(555) 123-4567", Style::default().fg(Color::DarkGray))
            } else {
                Span::styled(tui.phone.display_text(), Style::default().fg(Color::White))
            },
            Span::styled("█", Style::default().fg(Color::Cyan)),
        ]),
    ]
}

fn input_value_line(value: &str, placeholder: &str) -> Line<'static> {
    if value.is_empty() {
        Line::from(vec![
            Span::styled("█", Style::default().fg(Color::Cyan)),
            Span::styled(
                placeholder.to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(value.to_string(), Style::default().fg(Color::White)),
            Span::styled("█", Style::default().fg(Color::Cyan)),
        ])
    }
}

fn busy_line(spinner_frame: usize) -> Line<'static> {
    const FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
    Line::from(Span::styled(
        format!("{} Working...", FRAMES[spinner_frame % FRAMES.len()]),
        Style::default().fg(Color::Yellow),
    ))
}

fn hints_line(active: Tab) -> Line<'static> {
    let hint = match active {
        Tab::Quick => "↑↓ select • Enter sign in • Tab switch • Esc quit",
        Tab::Email => "Enter send code • Tab switch • Esc quit",
        Tab::Phone => "c country • Enter send code • Tab switch • Esc quit",
    };
    Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)))
}
