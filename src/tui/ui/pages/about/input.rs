use anyhow::{anyhow, Result};

use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::status::cursor::{Cursor, EntryCursor};
use crate::tui::status::{write_status, Page};
use crate::tui::utils::bus::{Bus, UiToCore};

pub fn handle_input(key: KeyEvent, bus: &Bus) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => {
            bus.ui_tx.send(UiToCore::Quit).map_err(|err| anyhow!(err))?;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            write_status(|status| {
                if let Page::About { view_offset } = &mut status.page {
                    *view_offset = view_offset.saturating_sub(1);
                }
                Ok(())
            })?;
            bus.ui_tx
                .send(UiToCore::Refresh)
                .map_err(|err| anyhow!(err))?;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            write_status(|status| {
                if let Page::About { view_offset } = &mut status.page {
                    *view_offset = view_offset.saturating_add(1);
                }
                Ok(())
            })?;
            bus.ui_tx
                .send(UiToCore::Refresh)
                .map_err(|err| anyhow!(err))?;
        }
        KeyCode::Esc | KeyCode::Enter => {
            let cursor = EntryCursor::About;
            let offset = cursor.view_offset();
            write_status(|status| {
                status.page = Page::Entry {
                    cursor: Some(cursor),
                    view_offset: offset,
                };
                Ok(())
            })?;
            bus.ui_tx
                .send(UiToCore::Refresh)
                .map_err(|err| anyhow!(err))?;
        }
        _ => {}
    }
    Ok(())
}
