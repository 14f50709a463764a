use anyhow::{anyhow, Result};
use strum::IntoEnumIterator;

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::tui::status::{read_status, ui::InputRawBuffer};

/// Visual state of one editable value in a key/value list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextState {
    Normal,
    Selected,
    Editing,
}

/// Render a `< choice >` selector over an iterable enum. While editing, the
/// highlighted choice comes from the transient index buffer.
pub fn selector_spans<'a, T>(current_index: usize, state: TextState) -> Result<Vec<Span<'a>>>
where
    T: IntoEnumIterator + std::fmt::Display + 'a,
{
    Ok(match state {
        TextState::Normal => vec![Span::raw(
            T::iter()
                .nth(current_index)
                .map(|item| item.to_string())
                .ok_or(anyhow!("Index out of bounds"))?,
        )],
        TextState::Selected => vec![Span::styled(
            T::iter()
                .nth(current_index)
                .map(|item| item.to_string())
                .ok_or(anyhow!("Index out of bounds"))?,
            Style::default().fg(Color::Green),
        )],
        TextState::Editing => {
            let selected_index = read_status(|status| {
                Ok(
                    if let InputRawBuffer::Index(index) = status.temporarily.input_raw_buffer {
                        Some(index)
                    } else {
                        None
                    },
                )
            })?
            .filter(|&index| index < T::iter().len());
            let selected_index = selected_index.unwrap_or(current_index);

            vec![
                Span::styled(
                    "< ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    T::iter()
                        .nth(selected_index)
                        .map(|item| item.to_string())
                        .unwrap_or_else(|| "Invalid".to_string()),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    " >",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]
        }
    })
}

/// Render a text value. While editing, the in-progress buffer is shown with
/// a reversed-video caret at the current offset.
pub fn input_spans<'a>(current_value: impl ToString, state: TextState) -> Result<Vec<Span<'a>>> {
    let mut out: Vec<Span> = Vec::new();
    match state {
        TextState::Normal => {
            out.push(Span::raw(current_value.to_string()));
        }
        TextState::Selected => {
            out.push(Span::styled(
                current_value.to_string(),
                Style::default().fg(Color::Green),
            ));
        }
        TextState::Editing => {
            let editing_opt = read_status(|status| {
                Ok(
                    if let InputRawBuffer::String { bytes, offset } =
                        &status.temporarily.input_raw_buffer
                    {
                        Some((String::from_utf8_lossy(bytes).to_string(), *offset))
                    } else {
                        None
                    },
                )
            })?;

            // If there's no editing buffer, fall back to the provided current
            // value and place the caret at the end.
            let (editing_string, offset) = match editing_opt {
                Some(pair) => pair,
                None => {
                    let text = current_value.to_string();
                    let end = text.chars().count() as isize;
                    (text, end)
                }
            };

            let chars: Vec<char> = editing_string.chars().collect();
            let len = chars.len() as isize;
            // Negative offsets count from the end.
            let position = (if offset < 0 { len + offset } else { offset }).clamp(0, len) as usize;

            let before: String = chars[..position].iter().collect();
            let caret: String = chars
                .get(position)
                .map(|c| c.to_string())
                .unwrap_or_else(|| " ".to_string());
            let after: String = if position < chars.len() {
                chars[position + 1..].iter().collect()
            } else {
                String::new()
            };

            out.push(Span::styled(before, Style::default().fg(Color::Yellow)));
            out.push(Span::styled(
                caret,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::REVERSED),
            ));
            out.push(Span::styled(after, Style::default().fg(Color::Yellow)));
        }
    }
    Ok(out)
}
