use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::i18n::lang;
use crate::tui::status::Status;

pub fn render_title(frame: &mut Frame, area: Rect, app: &Status) {
    let mut spans: Vec<Span> = vec![Span::styled(
        format!(" {} ", lang().title),
        Style::default().add_modifier(Modifier::BOLD),
    )];

    let path = if app.document.path.is_empty() {
        lang().untitled_page.clone()
    } else {
        app.document.path.clone()
    };
    spans.push(Span::styled(path, Style::default().fg(Color::DarkGray)));

    if app.document.dirty {
        spans.push(Span::styled(
            " [+]".to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }

    if app.temporarily.busy.busy {
        const FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
        let frame_index = (app.temporarily.busy.spinner_frame as usize) % FRAMES.len();
        spans.push(Span::raw(format!("  {}", FRAMES[frame_index])));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
