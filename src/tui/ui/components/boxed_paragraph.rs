use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

/// Render a bordered, optionally titled paragraph with scroll support.
pub fn render_boxed_paragraph(
    frame: &mut Frame,
    area: Rect,
    content: Vec<Line>,
    offset: usize,
    title: Option<&str>,
    show_scrollbar: bool,
) {
    let content_len = content.len();
    let visible = area.height.saturating_sub(2) as usize;
    // Keep the selected row in view: only scroll once the offset passes the
    // visible window.
    let scroll = offset.saturating_sub(visible.saturating_sub(1));

    let mut block = Block::default()
        .borders(Borders::ALL)
        .padding(Padding::left(1));

    if let Some(title_text) = title {
        block = block.title(format!(" {title_text} "));
    }

    let para = Paragraph::new(content)
        .block(block)
        .scroll((scroll as u16, 0));

    frame.render_widget(para, area);

    if show_scrollbar && content_len > visible {
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut ScrollbarState::new(content_len).position(offset),
        );
    }
}
