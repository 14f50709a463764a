use anyhow::{anyhow, Result};

use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::status::{
    clear_error,
    cursor::{Cursor, EntryCursor},
    read_status, write_status, Page,
};
use crate::tui::ui::pages::entry::input::actions;
use crate::tui::utils::bus::{Bus, UiToCore};

fn set_cursor(cursor: Option<EntryCursor>) -> Result<()> {
    let offset = cursor.map(|c| c.view_offset()).unwrap_or(0);
    write_status(|status| {
        status.page = Page::Entry {
            cursor,
            view_offset: offset,
        };
        Ok(())
    })
}

fn current_cursor() -> Result<Option<EntryCursor>> {
    read_status(|status| {
        if let Page::Entry { cursor, .. } = &status.page {
            Ok(*cursor)
        } else {
            Ok(None)
        }
    })
}

pub fn handle_input(key: KeyEvent, bus: &Bus) -> Result<()> {
    // While the add-block selector is open, keys go to the selector first.
    if actions::selector_active()? {
        actions::handle_selector_key(key, bus)?;
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') => {
            bus.ui_tx.send(UiToCore::Quit).map_err(|err| anyhow!(err))?;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            let cursor = current_cursor()?.unwrap_or(EntryCursor::AddBlock);
            set_cursor(Some(cursor.prev()))?;
            bus.ui_tx
                .send(UiToCore::Refresh)
                .map_err(|err| anyhow!(err))?;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let next = match current_cursor()? {
                Some(cursor) => cursor.next(),
                None => {
                    // First key press lands on the first row
                    let has_blocks =
                        read_status(|status| Ok(!status.document.content.blocks.is_empty()))?;
                    if has_blocks {
                        EntryCursor::Block { index: 0 }
                    } else {
                        EntryCursor::AddBlock
                    }
                }
            };
            set_cursor(Some(next))?;
            bus.ui_tx
                .send(UiToCore::Refresh)
                .map_err(|err| anyhow!(err))?;
        }
        KeyCode::PageUp => {
            let has_blocks =
                read_status(|status| Ok(!status.document.content.blocks.is_empty()))?;
            let cursor = if has_blocks {
                EntryCursor::Block { index: 0 }
            } else {
                EntryCursor::AddBlock
            };
            set_cursor(Some(cursor))?;
            bus.ui_tx
                .send(UiToCore::Refresh)
                .map_err(|err| anyhow!(err))?;
        }
        KeyCode::PageDown => {
            set_cursor(Some(EntryCursor::About))?;
            bus.ui_tx
                .send(UiToCore::Refresh)
                .map_err(|err| anyhow!(err))?;
        }
        KeyCode::Enter => {
            actions::handle_enter(bus)?;
        }
        KeyCode::Char('d') => {
            actions::remove_selected_block(bus)?;
        }
        KeyCode::Char('K') => {
            actions::move_selected_block(bus, true)?;
        }
        KeyCode::Char('J') => {
            actions::move_selected_block(bus, false)?;
        }
        KeyCode::Char('s') => {
            bus.ui_tx
                .send(UiToCore::SavePage)
                .map_err(|err| anyhow!(err))?;
        }
        KeyCode::Char('c') => {
            clear_error();
            bus.ui_tx
                .send(UiToCore::Refresh)
                .map_err(|err| anyhow!(err))?;
        }
        KeyCode::Esc => {
            set_cursor(None)?;
            bus.ui_tx
                .send(UiToCore::Refresh)
                .map_err(|err| anyhow!(err))?;
        }
        _ => {}
    }
    Ok(())
}
