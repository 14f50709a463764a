pub mod actions;
pub mod navigation;

pub use navigation::handle_input;

use anyhow::Result;

use crossterm::event::MouseEventKind;

use crate::tui::status::cursor::{Cursor, EntryCursor};
use crate::tui::status::{read_status, write_status, Page};
use crate::tui::utils::bus::Bus;

pub fn handle_mouse(event: crossterm::event::MouseEvent, _bus: &Bus) -> Result<()> {
    let step = |up: bool| -> Result<()> {
        let cursor = read_status(|status| {
            if let Page::Entry { cursor, .. } = &status.page {
                Ok(cursor.unwrap_or(EntryCursor::AddBlock))
            } else {
                Ok(EntryCursor::AddBlock)
            }
        })?;
        let next = if up { cursor.prev() } else { cursor.next() };
        let offset = next.view_offset();
        write_status(|status| {
            status.page = Page::Entry {
                cursor: Some(next),
                view_offset: offset,
            };
            Ok(())
        })?;
        Ok(())
    };

    match event.kind {
        MouseEventKind::ScrollUp => step(true)?,
        MouseEventKind::ScrollDown => step(false)?,
        _ => {}
    }
    Ok(())
}
