pub mod about;
pub mod editor;
pub mod entry;
pub mod preview;

use ratatui::prelude::*;

use crate::i18n::lang;
use crate::tui::status::{Page, Status};

/// Render the middle panel for whichever page is active.
pub fn render_panels(frame: &mut Frame, area: Rect, app: &Status) {
    match &app.page {
        Page::Entry { .. } => entry::render(frame, area, app),
        Page::Editor { .. } => editor::render(frame, area, app),
        Page::Preview { .. } => preview::render(frame, area, app),
        Page::About { .. } => about::render(frame, area, app),
    }
}

/// Page-provided bottom hints for the current app state.
pub fn bottom_hints_for_app(app: &Status) -> Vec<String> {
    let hints = &lang().hints;
    match &app.page {
        Page::Entry { .. } => {
            if app.temporarily.input_raw_buffer.is_editing() {
                vec![hints.cycle_choice.clone(), hints.confirm_cancel.clone()]
            } else {
                vec![
                    hints.move_vertical.clone(),
                    hints.enter_open.clone(),
                    hints.reorder.clone(),
                    hints.remove.clone(),
                    hints.save.clone(),
                    hints.quit.clone(),
                ]
            }
        }
        Page::Editor { .. } => {
            if app.temporarily.input_raw_buffer.is_editing() {
                vec![hints.edit_buffer.clone(), hints.confirm_cancel.clone()]
            } else {
                vec![
                    hints.move_vertical.clone(),
                    hints.enter_edit.clone(),
                    hints.reorder.clone(),
                    hints.remove.clone(),
                    hints.back.clone(),
                ]
            }
        }
        Page::Preview { .. } => vec![
            hints.move_vertical.clone(),
            hints.toggle_panel.clone(),
            hints.back.clone(),
        ],
        Page::About { .. } => vec![hints.move_vertical.clone(), hints.back.clone()],
    }
}
