use anyhow::Result;

use ratatui::{prelude::*, style::Modifier, text::Line};
use unicode_width::UnicodeWidthStr;

use crate::tui::ui::components::styled_label::TextState;

// Label column width; long labels simply push the value to the right
pub(crate) const TARGET_LABEL_WIDTH: usize = 18;
pub(crate) const LABEL_GAP: usize = 2;

/// Render a three-column key/value line used across the editor panels:
/// selection indicator, bold label, then the value spans produced by
/// `value_renderer` for the same `text_state`.
pub fn render_kv_line<F>(
    label: impl ToString,
    text_state: TextState,
    value_renderer: F,
) -> Result<Line<'static>>
where
    F: FnOnce(TextState) -> Result<Vec<Span<'static>>>,
{
    let label_str = label.to_string();

    let (indicator, indicator_style) = match text_state {
        TextState::Editing => ("> ", Style::default().fg(Color::Yellow)),
        TextState::Selected => ("> ", Style::default().fg(Color::Green)),
        TextState::Normal => ("  ", Style::default()),
    };

    let value_spans = value_renderer(text_state)?;

    // label width (unicode-aware)
    let label_width = label_str.width();
    let padding = TARGET_LABEL_WIDTH.saturating_sub(label_width) + LABEL_GAP;

    let mut spans: Vec<Span> = vec![
        Span::styled(indicator.to_string(), indicator_style),
        Span::styled(label_str, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(padding)),
    ];
    spans.extend(value_spans);

    Ok(Line::from(spans))
}
