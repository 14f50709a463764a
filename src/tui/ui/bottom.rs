use ratatui::{prelude::*, widgets::*};

use crate::i18n::lang;
use crate::tui::status::Status;
use crate::tui::ui::pages;

pub fn render_bottom(frame: &mut Frame, area: Rect, app: &Status) {
    let help_block = Block::default().borders(Borders::NONE);

    // With an error present, show it on the first line (red) and the
    // clear/quit instructions on the second.
    if let Some(err) = &app.temporarily.error {
        let rows = ratatui::layout::Layout::default()
            .direction(ratatui::layout::Direction::Vertical)
            .margin(0)
            .constraints([
                ratatui::layout::Constraint::Length(1),
                ratatui::layout::Constraint::Length(1),
            ])
            .split(area);

        let err_block = help_block.clone().style(
            Style::default()
                .bg(Color::Red)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
        let message = Paragraph::new(err.message.as_str())
            .alignment(Alignment::Left)
            .block(err_block);
        frame.render_widget(message, rows[0]);

        let instr_block = help_block.style(Style::default().bg(Color::Gray).fg(Color::DarkGray));
        let instr = Paragraph::new(format!(
            "{}   {}",
            lang().hints.clear_error,
            lang().hints.quit
        ))
        .alignment(Alignment::Center)
        .block(instr_block);
        frame.render_widget(instr, rows[1]);
    } else {
        let help_block = help_block.style(Style::default().bg(Color::Gray).fg(Color::White));

        let hints = pages::bottom_hints_for_app(app);
        let text = hints.join("   ");
        let help = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(help_block);
        frame.render_widget(help, area);
    }
}
