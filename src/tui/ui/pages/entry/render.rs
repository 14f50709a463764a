use ratatui::{
    prelude::*,
    style::{Color, Style},
    text::{Line, Span},
};

use crate::core::block::BlockKind;
use crate::i18n::lang;
use crate::tui::status::{cursor::Cursor, cursor::EntryCursor, Page, Status};
use crate::tui::ui::components::{
    boxed_paragraph::render_boxed_paragraph,
    styled_label::{selector_spans, TextState},
};

fn row_line(text: String, selected: bool) -> Line<'static> {
    if selected {
        Line::from(vec![
            Span::styled("> ".to_string(), Style::default().fg(Color::Green)),
            Span::styled(text, Style::default().fg(Color::Green)),
        ])
    } else {
        Line::from(vec![Span::raw("  ".to_string()), Span::raw(text)])
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &Status) {
    let (cursor, view_offset) = match &app.page {
        Page::Entry {
            cursor,
            view_offset,
        } => (*cursor, *view_offset),
        _ => (None, 0),
    };

    let blocks = &app.document.content.blocks;
    let mut lines: Vec<Line> = Vec::new();

    if blocks.is_empty() {
        lines.push(Line::from(Span::styled(
            lang().entry.no_blocks.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (index, block) in blocks.iter().enumerate() {
        let selected = cursor == Some(EntryCursor::Block { index });
        lines.push(row_line(
            format!("{:>2}. {:<16} {}", index + 1, block.kind(), block.summary()),
            selected,
        ));
    }

    lines.push(Line::default());

    // Add-block line doubles as the block-kind selector while editing.
    let add_selected = cursor == Some(EntryCursor::AddBlock);
    let editing = add_selected && app.temporarily.input_raw_buffer.is_editing();
    let state = if editing {
        TextState::Editing
    } else if add_selected {
        TextState::Selected
    } else {
        TextState::Normal
    };
    let mut add_spans: Vec<Span> = vec![match state {
        TextState::Normal => Span::raw(format!("  {} ", lang().entry.add_block)),
        _ => Span::styled(
            format!("> {} ", lang().entry.add_block),
            Style::default().fg(if editing { Color::Yellow } else { Color::Green }),
        ),
    }];
    if editing {
        match selector_spans::<BlockKind>(0, state) {
            Ok(spans) => add_spans.extend(spans),
            Err(err) => log::warn!("Failed to render block-kind selector: {err}"),
        }
    } else if add_selected {
        add_spans.push(Span::styled(
            lang().entry.add_block_hint.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(add_spans));

    lines.push(row_line(
        lang().entry.preview.clone(),
        cursor == Some(EntryCursor::Preview),
    ));
    lines.push(row_line(
        lang().entry.about.clone(),
        cursor == Some(EntryCursor::About),
    ));

    let offset = cursor.map(|c| c.view_offset()).unwrap_or(view_offset);
    render_boxed_paragraph(
        frame,
        area,
        lines,
        offset,
        Some(lang().entry.title.as_str()),
        true,
    );
}
