use anyhow::{anyhow, Result};

use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::status::cursor::Cursor;
use crate::tui::status::{clear_error, cursor::EntryCursor, write_status, Page};
use crate::tui::ui::pages::preview::{locate_panel, total_panels};
use crate::tui::utils::bus::{Bus, UiToCore};

pub fn handle_input(key: KeyEvent, bus: &Bus) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => {
            bus.ui_tx.send(UiToCore::Quit).map_err(|err| anyhow!(err))?;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            write_status(|status| {
                if let Page::Preview { focused_panel, .. } = &mut status.page {
                    *focused_panel = focused_panel.saturating_sub(1);
                }
                Ok(())
            })?;
            bus.ui_tx
                .send(UiToCore::Refresh)
                .map_err(|err| anyhow!(err))?;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            write_status(|status| {
                if let Page::Preview {
                    focused_panel,
                    panels,
                    ..
                } = &mut status.page
                {
                    let total = total_panels(panels);
                    if total > 0 && *focused_panel + 1 < total {
                        *focused_panel += 1;
                    }
                }
                Ok(())
            })?;
            bus.ui_tx
                .send(UiToCore::Refresh)
                .map_err(|err| anyhow!(err))?;
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            handle_toggle(bus)?;
        }
        KeyCode::PageUp => {
            write_status(|status| {
                if let Page::Preview { view_offset, .. } = &mut status.page {
                    *view_offset = view_offset.saturating_sub(5);
                }
                Ok(())
            })?;
            bus.ui_tx
                .send(UiToCore::Refresh)
                .map_err(|err| anyhow!(err))?;
        }
        KeyCode::PageDown => {
            write_status(|status| {
                if let Page::Preview { view_offset, .. } = &mut status.page {
                    *view_offset = view_offset.saturating_add(5);
                }
                Ok(())
            })?;
            bus.ui_tx
                .send(UiToCore::Refresh)
                .map_err(|err| anyhow!(err))?;
        }
        KeyCode::Char('c') => {
            clear_error();
            bus.ui_tx
                .send(UiToCore::Refresh)
                .map_err(|err| anyhow!(err))?;
        }
        KeyCode::Esc => {
            handle_leave_page(bus)?;
        }
        _ => {}
    }
    Ok(())
}

/// Click the focused panel's header: collapse it if open, otherwise collapse
/// whatever else is open in its group and expand it.
pub fn handle_toggle(bus: &Bus) -> Result<()> {
    let changed = write_status(|status| {
        if let Page::Preview {
            focused_panel,
            panels,
            ..
        } = &mut status.page
        {
            if let Some((group, panel)) = locate_panel(panels, *focused_panel) {
                if let Some(set) = panels.get_mut(group) {
                    return Ok(set.toggle(panel));
                }
            }
        }
        Ok(false)
    })?;
    if changed {
        bus.ui_tx
            .send(UiToCore::Refresh)
            .map_err(|err| anyhow!(err))?;
    }
    Ok(())
}

/// Back to the entry page; the transient disclosure state is dropped with
/// the preview page, so the next visit starts all-closed again.
pub fn handle_leave_page(bus: &Bus) -> Result<()> {
    let cursor = EntryCursor::Preview;
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
    Ok(())
}
