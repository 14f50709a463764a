pub mod navigation;

pub use navigation::handle_input;

use anyhow::Result;

use crossterm::event::MouseEventKind;

use crate::tui::status::{write_status, Page};
use crate::tui::utils::bus::Bus;

pub fn handle_mouse(event: crossterm::event::MouseEvent, _bus: &Bus) -> Result<()> {
    match event.kind {
        MouseEventKind::ScrollUp => {
            write_status(|status| {
                if let Page::Preview { view_offset, .. } = &mut status.page {
                    *view_offset = view_offset.saturating_sub(1);
                }
                Ok(())
            })?;
        }
        MouseEventKind::ScrollDown => {
            write_status(|status| {
                if let Page::Preview { view_offset, .. } = &mut status.page {
                    *view_offset = view_offset.saturating_add(1);
                }
                Ok(())
            })?;
        }
        _ => {}
    }
    Ok(())
}
