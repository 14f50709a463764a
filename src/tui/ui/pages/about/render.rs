use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::i18n::lang;
use crate::tui::status::{Page, Status};
use crate::tui::ui::components::boxed_paragraph::render_boxed_paragraph;

pub fn render(frame: &mut Frame, area: Rect, app: &Status) {
    let view_offset = match &app.page {
        Page::About { view_offset } => *view_offset,
        _ => 0,
    };

    let lines: Vec<Line> = vec![
        Line::from(Span::styled(
            format!("helpdeck {}", env!("CARGO_PKG_VERSION")),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(env!("CARGO_PKG_DESCRIPTION")),
        Line::default(),
        Line::from(Span::styled(
            lang().about.keys_heading.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  ↑/↓ j/k     move"),
        Line::from("  Enter       open / edit / toggle"),
        Line::from("  Esc         cancel / back"),
        Line::from("  d           remove record"),
        Line::from("  K / J       move record up / down"),
        Line::from("  s           save page"),
        Line::from("  c           clear error"),
        Line::from("  q           quit"),
        Line::default(),
        Line::from(Span::styled(
            env!("CARGO_PKG_REPOSITORY"),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    render_boxed_paragraph(
        frame,
        area,
        lines,
        view_offset,
        Some(lang().about.title.as_str()),
        false,
    );
}
