//! TUI status module
//!
//! This module provides the TUI-specific status tree and read/write helpers.
//! The tree owns the page document being edited plus the transient UI state
//! (current page, cursors, input buffer, error banner).

pub mod cursor;
pub mod ui;

use anyhow::{anyhow, Result};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::sync::Arc;

use yuuka::derive_struct;

derive_struct! {
    pub Status {
        document: {
            content: crate::core::document::PageDocument = crate::core::document::PageDocument::default(),
            path: String = String::new(),
            dirty: bool = false,
        },

        page: enum Page {
            Entry {
                cursor?: crate::tui::status::cursor::EntryCursor,
                view_offset: usize = 0,
            },
            Editor {
                selected_block: usize,
                view_offset: usize = 0,
                cursor: crate::tui::status::cursor::EditorCursor = crate::tui::status::cursor::EditorCursor::first(),
            },
            Preview {
                view_offset: usize = 0,
                focused_panel: usize = 0,
                panels: Vec<crate::core::disclosure::DisclosureSet> = vec![],
            },
            About {
                view_offset: usize,
            }
        } = Entry { cursor: None, view_offset: 0 },

        temporarily: {
            // Short-lived UI state. Only place truly transient values here.
            input_raw_buffer: crate::tui::status::ui::InputRawBuffer = crate::tui::status::ui::InputRawBuffer::None,

            // Busy indicator for global spinner
            busy: {
                busy: bool = false,
                spinner_frame: u32 = 0,
            },

            // Global transient error storage
            error?: ErrorInfo {
                message: String,
                timestamp: chrono::DateTime<chrono::Local>,
            },

            // Set by the core worker when a quit was requested
            should_quit: bool = false,
        }
    }
}

/// Global TUI status instance
static TUI_STATUS: OnceCell<Arc<RwLock<Status>>> = OnceCell::new();

/// Initialize the TUI status instance. This should be called once at
/// application startup, before any read/write access.
pub fn init_status(status: Arc<RwLock<Status>>) -> Result<()> {
    TUI_STATUS
        .set(status)
        .map_err(|_| anyhow!("TUI status already initialized"))
}

/// Read-only accessor for `Status`.
///
/// The closure borrows the status tree; the returned value is cloned before
/// leaving so no lock guard escapes. Therefore `R: Clone` is required.
pub fn read_status<R, F>(f: F) -> Result<R>
where
    F: FnOnce(&Status) -> Result<R>,
    R: Clone,
{
    let cell = TUI_STATUS
        .get()
        .ok_or_else(|| anyhow!("TUI status not initialized"))?;
    let guard = cell.read();
    let val = f(&guard)?;
    Ok(val.clone())
}

/// Write accessor for `Status`.
pub fn write_status<R, F>(mut f: F) -> Result<R>
where
    F: FnMut(&mut Status) -> Result<R>,
    R: Clone,
{
    let cell = TUI_STATUS
        .get()
        .ok_or_else(|| anyhow!("TUI status not initialized"))?;
    let mut guard = cell.write();
    let val = f(&mut guard)?;
    Ok(val.clone())
}

/// Store a transient error banner; shown by the bottom bar until cleared.
pub fn set_error(message: impl Into<String>) {
    let message = message.into();
    if let Err(err) = write_status(|status| {
        status.temporarily.error = Some(ErrorInfo {
            message: message.clone(),
            timestamp: chrono::Local::now(),
        });
        Ok(())
    }) {
        log::error!("Failed to store UI error '{message}': {err}");
    }
}

/// Clear the transient error banner.
pub fn clear_error() {
    if let Err(err) = write_status(|status| {
        status.temporarily.error = None;
        Ok(())
    }) {
        log::error!("Failed to clear UI error: {err}");
    }
}
