pub mod bottom;
pub mod components;
pub mod pages;
pub mod title;

use ratatui::prelude::*;

use crate::tui::status::Status;

pub fn render_ui(frame: &mut Frame, app: &Status) {
    let area = frame.area();
    // Reserve 2 lines for the bottom bar when an error banner is showing
    let bottom_len = if app.temporarily.error.is_some() { 2 } else { 1 };
    let main_chunks = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .margin(0)
        .constraints([
            ratatui::layout::Constraint::Length(1), // Title
            ratatui::layout::Constraint::Min(0),
            ratatui::layout::Constraint::Length(bottom_len),
        ])
        .split(area);

    title::render_title(frame, main_chunks[0], app);
    pages::render_panels(frame, main_chunks[1], app);
    bottom::render_bottom(frame, main_chunks[2], app);
}
