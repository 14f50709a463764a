use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::core::block::{Block, CtaButton};
use crate::core::disclosure::DisclosureSet;
use crate::core::style::{parse_hex_color, StyleConfig};
use crate::i18n::lang;
use crate::tui::status::{Page, Status};
use crate::tui::ui::components::boxed_paragraph::render_boxed_paragraph;

fn or_placeholder(text: &str, fallback: &str) -> String {
    if text.is_empty() {
        fallback.to_string()
    } else {
        text.to_string()
    }
}

fn heading_line(text: String, style: &StyleConfig) -> Line<'static> {
    let mut line_style = Style::default().add_modifier(Modifier::BOLD);
    if let Some(color) = parse_hex_color(&style.text_color) {
        line_style = line_style.fg(color);
    }
    Line::from(Span::styled(text, line_style)).alignment(style.text_align.as_ratatui())
}

fn subtle_line(text: String, style: &StyleConfig) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
        .alignment(style.text_align.as_ratatui())
}

fn button_span(button: &CtaButton) -> Span<'static> {
    let mut style = Style::default();
    if let Some(color) = parse_hex_color(&button.bg_color) {
        style = style.bg(color);
    }
    if let Some(color) = parse_hex_color(&button.text_color) {
        style = style.fg(color);
    }
    Span::styled(format!("[ {} ]", or_placeholder(&button.text, "Button")), style)
}

/// Accordion panel lines for one FAQ block. The icon rotation is derived
/// from the open state, and the open panel's answer renders below its
/// question.
fn faq_lines(
    block: &Block,
    set: Option<&DisclosureSet>,
    panel_base: usize,
    focused_panel: usize,
) -> Vec<Line<'static>> {
    let Block::Faq {
        header_title,
        header_subtitle,
        style,
        faqs,
    } = block
    else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    lines.push(heading_line(header_title.clone(), style));
    lines.push(subtle_line(header_subtitle.clone(), style));

    for (index, faq) in faqs.iter().enumerate() {
        let open = set.map(|set| set.is_open(index)).unwrap_or(false);
        let rotated = set.map(|set| set.is_rotated(index)).unwrap_or(false);
        let focused = panel_base + index == focused_panel;
        let icon = if rotated { "▾" } else { "▸" };

        let mut question_style = Style::default();
        let indicator = if focused {
            question_style = question_style.fg(Color::Green);
            "> "
        } else {
            "  "
        };
        lines.push(Line::from(vec![
            Span::styled(indicator.to_string(), question_style),
            Span::styled(format!("{icon} "), question_style),
            Span::styled(
                or_placeholder(&faq.question, "Question"),
                question_style.add_modifier(Modifier::BOLD),
            ),
        ]));
        if open {
            lines.push(Line::from(Span::styled(
                format!("      {}", or_placeholder(&faq.answer, "Answer")),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    lines
}

fn block_lines(
    block: &Block,
    set: Option<&DisclosureSet>,
    panel_base: usize,
    focused_panel: usize,
) -> Vec<Line<'static>> {
    match block {
        Block::Hero {
            title,
            subtitle,
            placeholder,
            show_search,
            style,
        } => {
            let mut lines = vec![
                heading_line(title.clone(), style),
                subtle_line(subtitle.clone(), style),
            ];
            if *show_search {
                lines.push(
                    Line::from(Span::styled(
                        format!("🔍 [ {} ]", or_placeholder(placeholder, "Search...")),
                        Style::default().fg(Color::DarkGray),
                    ))
                    .alignment(style.text_align.as_ratatui()),
                );
            }
            lines
        }
        Block::Header {
            site_title,
            show_logo,
            menu_items,
        } => {
            let mut spans: Vec<Span> = Vec::new();
            if *show_logo {
                spans.push(Span::styled(
                    "◉ ".to_string(),
                    Style::default().fg(Color::Blue),
                ));
            }
            spans.push(Span::styled(
                site_title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            if !menu_items.is_empty() {
                let menu = menu_items
                    .iter()
                    .map(|item| or_placeholder(&item.label, "Link"))
                    .collect::<Vec<_>>()
                    .join(" · ");
                spans.push(Span::styled(
                    format!("    {menu}"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            vec![Line::from(spans)]
        }
        Block::Faq { .. } => faq_lines(block, set, panel_base, focused_panel),
        Block::CategoryCards {
            heading,
            subheading,
            style,
            cards,
            ..
        } => {
            let mut lines = vec![
                heading_line(heading.clone(), style),
                subtle_line(subheading.clone(), style),
            ];
            for card in cards {
                lines.push(Line::from(vec![
                    Span::styled("▪ ".to_string(), Style::default().fg(Color::Blue)),
                    Span::styled(
                        or_placeholder(&card.title, "Category"),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(" — {}", card.description),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
            }
            lines
        }
        Block::PopularArticles {
            heading,
            style,
            articles,
        } => {
            let mut lines = vec![heading_line(heading.clone(), style)];
            for article in articles {
                lines.push(Line::from(vec![
                    Span::raw("• ".to_string()),
                    Span::styled(
                        or_placeholder(&article.title, "Article"),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]));
                if !article.description.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", article.description),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
            }
            lines
        }
        Block::NeedHelp {
            heading,
            description,
            style,
            buttons,
        } => {
            let mut lines = vec![
                heading_line(heading.clone(), style),
                subtle_line(description.clone(), style),
            ];
            if !buttons.is_empty() {
                let mut spans: Vec<Span> = Vec::new();
                for (index, button) in buttons.iter().enumerate() {
                    if index > 0 {
                        spans.push(Span::raw(
                            " ".repeat(style.gap_between_cards.max(1) as usize),
                        ));
                    }
                    spans.push(button_span(button));
                }
                lines.push(Line::from(spans).alignment(style.text_align.as_ratatui()));
            }
            lines
        }
        Block::ResponseTimes {
            title,
            subtitle,
            style,
            cards,
        } => {
            let mut lines = vec![
                heading_line(title.clone(), style),
                subtle_line(subtitle.clone(), style),
            ];
            for card in cards {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:<12}", or_placeholder(&card.label, "Channel")),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        or_placeholder(&card.value, "—"),
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(
                        format!("  {}", card.description),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
            }
            lines
        }
        Block::SupportHours {
            title,
            subtitle,
            style,
            cards,
        } => {
            let mut lines = vec![
                heading_line(title.clone(), style),
                subtle_line(subtitle.clone(), style),
            ];
            for card in cards {
                lines.push(Line::from(Span::styled(
                    or_placeholder(&card.title, "Hours"),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                for row in &card.rows {
                    lines.push(Line::from(Span::raw(format!(
                        "  {:<14} {}",
                        or_placeholder(&row.label, "—"),
                        or_placeholder(&row.hours, "—"),
                    ))));
                }
            }
            lines
        }
        Block::ContactForm {
            title,
            subtitle,
            form_shortcode,
        } => {
            let style = StyleConfig::default();
            vec![
                heading_line(title.clone(), &style),
                subtle_line(subtitle.clone(), &style),
                Line::from(Span::styled(
                    or_placeholder(form_shortcode, lang().preview.form_placeholder.as_str()),
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        }
        Block::Footer { footer_text, links } => {
            let mut spans = vec![Span::styled(
                footer_text.clone(),
                Style::default().fg(Color::DarkGray),
            )];
            if !links.is_empty() {
                let joined = links
                    .iter()
                    .map(|link| or_placeholder(&link.text, "Link"))
                    .collect::<Vec<_>>()
                    .join(" · ");
                spans.push(Span::styled(
                    format!("    {joined}"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            vec![Line::from(spans)]
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &Status) {
    let (view_offset, focused_panel, panels) = match &app.page {
        Page::Preview {
            view_offset,
            focused_panel,
            panels,
        } => (*view_offset, *focused_panel, panels.clone()),
        _ => return,
    };

    let mut lines: Vec<Line> = Vec::new();
    let mut group = 0usize;
    let mut panel_base = 0usize;

    if app.document.content.is_empty() {
        lines.push(Line::from(Span::styled(
            lang().preview.empty_page.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    for block in &app.document.content.blocks {
        let set = if matches!(block, Block::Faq { .. }) {
            let current = panels.get(group);
            group += 1;
            current
        } else {
            None
        };
        lines.extend(block_lines(block, set, panel_base, focused_panel));
        if let Some(set) = set {
            panel_base += set.len();
        }
        lines.push(Line::default());
    }

    render_boxed_paragraph(
        frame,
        area,
        lines,
        view_offset,
        Some(lang().preview.title.as_str()),
        true,
    );
}
