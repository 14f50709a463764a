use anyhow::{anyhow, Result};

use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::status::{
    clear_error,
    cursor::{Cursor, EditorCursor, EntryCursor},
    read_status, write_status, Page,
};
use crate::tui::ui::pages::editor::input::{actions, editing};
use crate::tui::utils::bus::{Bus, UiToCore};

pub(super) fn current_editor() -> Result<Option<(usize, EditorCursor)>> {
    read_status(|status| {
        if let Page::Editor {
            selected_block,
            cursor,
            ..
        } = &status.page
        {
            Ok(Some((*selected_block, *cursor)))
        } else {
            Ok(None)
        }
    })
}

pub(super) fn set_cursor(selected_block: usize, cursor: EditorCursor) -> Result<()> {
    let offset = cursor.view_offset();
    write_status(|status| {
        status.page = Page::Editor {
            selected_block,
            view_offset: offset,
            cursor,
        };
        Ok(())
    })
}

pub fn handle_input(key: KeyEvent, bus: &Bus) -> Result<()> {
    // An active edit buffer captures every key first.
    let editing_active =
        read_status(|status| Ok(status.temporarily.input_raw_buffer.is_editing()))?;
    if editing_active {
        editing::handle_editing_key(key, bus)?;
        return Ok(());
    }

    let Some((selected_block, cursor)) = current_editor()? else {
        return Ok(());
    };

    match key.code {
        KeyCode::Char('q') => {
            bus.ui_tx.send(UiToCore::Quit).map_err(|err| anyhow!(err))?;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            set_cursor(selected_block, cursor.prev())?;
            bus.ui_tx
                .send(UiToCore::Refresh)
                .map_err(|err| anyhow!(err))?;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            set_cursor(selected_block, cursor.next())?;
            bus.ui_tx
                .send(UiToCore::Refresh)
                .map_err(|err| anyhow!(err))?;
        }
        KeyCode::Enter => {
            actions::handle_enter(bus)?;
        }
        KeyCode::Char('d') => {
            actions::remove_under_cursor(bus)?;
        }
        KeyCode::Char('K') => {
            actions::move_under_cursor(bus, true)?;
        }
        KeyCode::Char('J') => {
            actions::move_under_cursor(bus, false)?;
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
            handle_leave_page(bus, selected_block)?;
        }
        _ => {}
    }
    Ok(())
}

/// Back to the entry page, keeping the edited block selected.
pub fn handle_leave_page(bus: &Bus, selected_block: usize) -> Result<()> {
    let cursor = EntryCursor::Block {
        index: selected_block,
    };
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
