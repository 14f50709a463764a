use anyhow::{anyhow, Result};

use crossterm::event::{KeyCode, KeyEvent};
use strum::IntoEnumIterator;

use crate::core::{block::BlockKind, disclosure::DisclosureSet};
use crate::i18n::lang;
use crate::tui::status::{
    cursor::{Cursor, EditorCursor, EntryCursor},
    read_status, set_error, ui::InputRawBuffer, write_status, Page,
};
use crate::tui::utils::bus::{Bus, UiToCore};

fn current_cursor() -> Result<Option<EntryCursor>> {
    read_status(|status| {
        if let Page::Entry { cursor, .. } = &status.page {
            Ok(*cursor)
        } else {
            Ok(None)
        }
    })
}

/// Whether the add-block kind selector is currently open.
pub fn selector_active() -> Result<bool> {
    read_status(|status| {
        Ok(matches!(
            (&status.page, &status.temporarily.input_raw_buffer),
            (
                Page::Entry {
                    cursor: Some(EntryCursor::AddBlock),
                    ..
                },
                InputRawBuffer::Index(_)
            )
        ))
    })
}

/// Left/Right cycle the block kind, Enter appends the chosen block, Esc
/// closes the selector without adding anything.
pub fn handle_selector_key(key: KeyEvent, bus: &Bus) -> Result<()> {
    let count = BlockKind::iter().len();
    match key.code {
        KeyCode::Left => {
            write_status(|status| {
                if let InputRawBuffer::Index(index) = &mut status.temporarily.input_raw_buffer {
                    *index = if *index == 0 { count - 1 } else { *index - 1 };
                }
                Ok(())
            })?;
        }
        KeyCode::Right => {
            write_status(|status| {
                if let InputRawBuffer::Index(index) = &mut status.temporarily.input_raw_buffer {
                    *index = (*index + 1) % count;
                }
                Ok(())
            })?;
        }
        KeyCode::Enter => {
            let chosen = read_status(|status| {
                Ok(
                    if let InputRawBuffer::Index(index) = status.temporarily.input_raw_buffer {
                        index
                    } else {
                        0
                    },
                )
            })?;
            if let Some(kind) = BlockKind::iter().nth(chosen) {
                let index = write_status(|status| {
                    status.temporarily.input_raw_buffer = InputRawBuffer::None;
                    status.document.dirty = true;
                    Ok(status.document.content.add_block(kind))
                })?;
                // Land the cursor on the block that was just added
                write_status(|status| {
                    status.page = Page::Entry {
                        cursor: Some(EntryCursor::Block { index }),
                        view_offset: index,
                    };
                    Ok(())
                })?;
            }
        }
        KeyCode::Esc => {
            write_status(|status| {
                status.temporarily.input_raw_buffer = InputRawBuffer::None;
                Ok(())
            })?;
        }
        _ => {}
    }
    bus.ui_tx
        .send(UiToCore::Refresh)
        .map_err(|err| anyhow!(err))?;
    Ok(())
}

pub fn handle_enter(bus: &Bus) -> Result<()> {
    let cursor = current_cursor()?;
    match cursor {
        Some(EntryCursor::Block { index }) => {
            write_status(|status| {
                if status.document.content.blocks.get(index).is_none() {
                    return Ok(());
                }
                status.page = Page::Editor {
                    selected_block: index,
                    view_offset: 0,
                    cursor: EditorCursor::Field { index: 0 },
                };
                Ok(())
            })?;
        }
        Some(EntryCursor::AddBlock) => {
            // Open the kind selector seeded with the first kind
            write_status(|status| {
                status.temporarily.input_raw_buffer = InputRawBuffer::Index(0);
                Ok(())
            })?;
        }
        Some(EntryCursor::Preview) => {
            enter_preview()?;
        }
        Some(EntryCursor::About) => {
            write_status(|status| {
                status.page = Page::About { view_offset: 0 };
                Ok(())
            })?;
        }
        None => {
            // Nothing selected yet; Enter lands on the first row
            let has_blocks =
                read_status(|status| Ok(!status.document.content.blocks.is_empty()))?;
            let cursor = if has_blocks {
                EntryCursor::Block { index: 0 }
            } else {
                EntryCursor::AddBlock
            };
            let offset = cursor.view_offset();
            write_status(|status| {
                status.page = Page::Entry {
                    cursor: Some(cursor),
                    view_offset: offset,
                };
                Ok(())
            })?;
        }
    }
    bus.ui_tx
        .send(UiToCore::Refresh)
        .map_err(|err| anyhow!(err))?;
    Ok(())
}

/// Build one fresh all-closed disclosure set per accordion block and switch
/// to the preview page.
pub fn enter_preview() -> Result<()> {
    write_status(|status| {
        let panels: Vec<DisclosureSet> = status
            .document
            .content
            .blocks
            .iter()
            .filter_map(|block| match block {
                crate::core::block::Block::Faq { faqs, .. } => {
                    Some(DisclosureSet::interactive(faqs.len()))
                }
                _ => None,
            })
            .collect();
        status.page = Page::Preview {
            view_offset: 0,
            focused_panel: 0,
            panels,
        };
        Ok(())
    })?;
    Ok(())
}

pub fn remove_selected_block(bus: &Bus) -> Result<()> {
    if let Some(EntryCursor::Block { index }) = current_cursor()? {
        let removed = write_status(|status| {
            let removed = status.document.content.remove_block(index);
            if removed {
                status.document.dirty = true;
            }
            Ok(removed)
        })?;
        if removed {
            // Keep the cursor on a row that still exists
            let len = read_status(|status| Ok(status.document.content.blocks.len()))?;
            let cursor = if len == 0 {
                EntryCursor::AddBlock
            } else {
                EntryCursor::Block {
                    index: index.min(len - 1),
                }
            };
            let offset = cursor.view_offset();
            write_status(|status| {
                status.page = Page::Entry {
                    cursor: Some(cursor),
                    view_offset: offset,
                };
                Ok(())
            })?;
        } else {
            set_error(lang().entry.remove_failed.clone());
        }
        bus.ui_tx
            .send(UiToCore::Refresh)
            .map_err(|err| anyhow!(err))?;
    }
    Ok(())
}

pub fn move_selected_block(bus: &Bus, up: bool) -> Result<()> {
    if let Some(EntryCursor::Block { index }) = current_cursor()? {
        let moved = write_status(|status| {
            let moved = if up {
                status.document.content.move_block_up(index)
            } else {
                status.document.content.move_block_down(index)
            };
            if moved {
                status.document.dirty = true;
            }
            Ok(moved)
        })?;
        if moved {
            // Follow the block to its new position
            let cursor = EntryCursor::Block {
                index: if up { index - 1 } else { index + 1 },
            };
            let offset = cursor.view_offset();
            write_status(|status| {
                status.page = Page::Entry {
                    cursor: Some(cursor),
                    view_offset: offset,
                };
                Ok(())
            })?;
        }
        bus.ui_tx
            .send(UiToCore::Refresh)
            .map_err(|err| anyhow!(err))?;
    }
    Ok(())
}
