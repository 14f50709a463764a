use anyhow::Result;

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use strum::IntoEnumIterator;

use crate::core::block::{Block, FieldKind, FieldSpec, FieldValue};
use crate::core::disclosure::DisclosureSet;
use crate::core::style::{parse_hex_color, TextAlign};
use crate::i18n::lang;
use crate::tui::status::{cursor::editor_row, cursor::EditorCursor, Page, Status};
use crate::tui::ui::components::{
    boxed_paragraph::render_boxed_paragraph,
    kv_line::render_kv_line,
    styled_label::{input_spans, selector_spans, TextState},
};

fn text_state(selected: bool, editing: bool) -> TextState {
    if selected && editing {
        TextState::Editing
    } else if selected {
        TextState::Selected
    } else {
        TextState::Normal
    }
}

/// One key/value line for a field, dispatching on the field kind.
fn field_line(
    spec: &FieldSpec,
    label: String,
    value: Option<FieldValue>,
    state: TextState,
) -> Result<Line<'static>> {
    render_kv_line(label, state, |state| {
        let value = value.clone();
        match spec.kind {
            FieldKind::Align => {
                let current = match value {
                    Some(FieldValue::Align(align)) => TextAlign::iter()
                        .position(|candidate| candidate == align)
                        .unwrap_or(0),
                    _ => 0,
                };
                selector_spans::<TextAlign>(current, state)
            }
            FieldKind::Toggle => {
                let display = match value {
                    Some(value) => value.display(),
                    None => "off".to_string(),
                };
                input_spans(display, state)
            }
            FieldKind::Color => {
                let display = value.map(|v| v.display()).unwrap_or_default();
                let mut spans: Vec<Span> = Vec::new();
                if let Some(color) = parse_hex_color(&display) {
                    spans.push(Span::styled("■ ".to_string(), Style::default().fg(color)));
                }
                spans.extend(input_spans(display, state)?);
                Ok(spans)
            }
            FieldKind::Text => {
                let display = value.map(|v| v.display()).unwrap_or_default();
                input_spans(display, state)
            }
        }
    })
}

fn action_line(text: String, selected: bool) -> Line<'static> {
    if selected {
        Line::from(Span::styled(
            format!("> {text}"),
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from(Span::styled(
            format!("  {text}"),
            Style::default().fg(Color::DarkGray),
        ))
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &Status) {
    let (selected_block, cursor) = match &app.page {
        Page::Editor {
            selected_block,
            cursor,
            ..
        } => (*selected_block, *cursor),
        _ => return,
    };

    let Some(block) = app.document.content.blocks.get(selected_block) else {
        render_boxed_paragraph(
            frame,
            area,
            vec![Line::from(lang().editor.missing_block.clone())],
            0,
            Some(lang().editor.title.as_str()),
            false,
        );
        return;
    };

    let editing = app.temporarily.input_raw_buffer.is_editing();
    let mut lines: Vec<Line> = Vec::new();

    for (index, spec) in block.field_specs().iter().enumerate() {
        let selected = cursor == EditorCursor::Field { index };
        let line = field_line(
            spec,
            spec.label.to_string(),
            block.field(spec.key),
            text_state(selected, editing),
        );
        match line {
            Ok(line) => lines.push(line),
            Err(err) => log::warn!("Failed to render field '{}': {err}", spec.key),
        }
    }
    lines.push(Line::default());

    let noun = block.item_noun().unwrap_or("item");
    for item in 0..block.items_len() {
        lines.push(Line::from(Span::styled(
            format!("◆ {}", block.item_title(item)),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));

        for (field, spec) in block.item_specs().iter().enumerate() {
            let selected = cursor == EditorCursor::ItemField { item, field };
            let line = field_line(
                spec,
                spec.label.to_string(),
                block.item_field(item, spec.key),
                text_state(selected, editing),
            );
            match line {
                Ok(line) => lines.push(line),
                Err(err) => log::warn!("Failed to render item field '{}': {err}", spec.key),
            }
        }

        if block.supports_rows() {
            for row in 0..block.rows_len(item) {
                for (field, spec) in block.row_specs().iter().enumerate() {
                    let selected = cursor == EditorCursor::RowField { item, row, field };
                    let line = field_line(
                        spec,
                        format!("{} {} {}", lang().editor.row_label, row + 1, spec.label),
                        block.row_field(item, row, spec.key),
                        text_state(selected, editing),
                    );
                    match line {
                        Ok(line) => lines.push(line),
                        Err(err) => {
                            log::warn!("Failed to render row field '{}': {err}", spec.key)
                        }
                    }
                }
            }
            lines.push(action_line(
                lang().editor.add_row.clone(),
                cursor == EditorCursor::AddRow { item },
            ));
        }

        lines.push(Line::default());
    }

    if block.item_noun().is_some() {
        lines.push(action_line(
            format!("{} {noun}", lang().editor.add_item),
            cursor == EditorCursor::AddItem,
        ));
    }

    // Accordion blocks get a static preview below the form: the disabled
    // authoring-mode variant, every panel closed and inert.
    if let Block::Faq { faqs, .. } = block {
        let inert = DisclosureSet::inert(faqs.len());
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            lang().editor.preview_heading.clone(),
            Style::default().fg(Color::DarkGray),
        )));
        for (index, faq) in faqs.iter().enumerate() {
            let icon = if inert.is_rotated(index) { "▾" } else { "▸" };
            lines.push(Line::from(Span::styled(
                format!(
                    "  {icon} {}",
                    if faq.question.is_empty() {
                        "Question"
                    } else {
                        faq.question.as_str()
                    }
                ),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let offset = editor_row(block, cursor);
    let title = format!("{} — {}", lang().editor.title, block.kind());
    render_boxed_paragraph(frame, area, lines, offset, Some(title.as_str()), true);
}
