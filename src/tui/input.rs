use anyhow::{anyhow, Result};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::tui::status::{read_status, Page};
use crate::tui::ui::pages;
use crate::tui::utils::bus::{Bus, UiToCore};

/// Route one terminal event to the active page's handler.
pub fn handle_event(event: Event, bus: &Bus) -> Result<()> {
    match event {
        Event::Key(key) => {
            // Only handle the initial key press event. Ignore Repeat and
            // Release so a single physical key press maps to a single action.
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            // Early catch for Ctrl + C so the app can exit immediately.
            if key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('c'))
            {
                bus.ui_tx.send(UiToCore::Quit).map_err(|err| anyhow!(err))?;
                return Ok(());
            }

            handle_key_event(key, bus)?;
        }
        Event::Mouse(mouse) => match read_status(|status| Ok(status.page.clone()))? {
            Page::Entry { .. } => pages::entry::input::handle_mouse(mouse, bus)?,
            Page::Preview { .. } => pages::preview::input::handle_mouse(mouse, bus)?,
            _ => {}
        },
        _ => {}
    }
    Ok(())
}

fn handle_key_event(key: KeyEvent, bus: &Bus) -> Result<()> {
    match read_status(|status| Ok(status.page.clone()))? {
        Page::Entry { .. } => pages::entry::input::handle_input(key, bus),
        Page::Editor { .. } => pages::editor::input::handle_input(key, bus),
        Page::Preview { .. } => pages::preview::input::handle_input(key, bus),
        Page::About { .. } => pages::about::handle_input(key, bus),
    }
}
