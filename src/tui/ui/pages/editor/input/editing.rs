use anyhow::{anyhow, Result};

use crossterm::event::{KeyCode, KeyEvent};
use strum::IntoEnumIterator;

use crate::core::block::FieldValue;
use crate::core::style::TextAlign;
use crate::tui::status::{ui::InputRawBuffer, write_status};
use crate::tui::ui::pages::editor::input::navigation::current_editor;
use crate::tui::ui::pages::editor::{apply_target, resolve_target};
use crate::tui::utils::bus::{Bus, UiToCore};

/// Key handling while an edit buffer is open: characters and caret movement
/// mutate the transient buffer, Enter commits, Esc discards.
pub fn handle_editing_key(key: KeyEvent, bus: &Bus) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            commit_edit()?;
        }
        KeyCode::Esc => {
            write_status(|status| {
                status.temporarily.input_raw_buffer = InputRawBuffer::None;
                Ok(())
            })?;
        }
        KeyCode::Left => {
            write_status(|status| {
                match &mut status.temporarily.input_raw_buffer {
                    InputRawBuffer::String { bytes, offset } => {
                        let len = String::from_utf8_lossy(bytes).chars().count() as isize;
                        let position = if *offset < 0 { len + *offset } else { *offset };
                        *offset = (position - 1).max(0);
                    }
                    InputRawBuffer::Index(index) => {
                        let count = TextAlign::iter().len();
                        *index = if *index == 0 { count - 1 } else { *index - 1 };
                    }
                    InputRawBuffer::None => {}
                }
                Ok(())
            })?;
        }
        KeyCode::Right => {
            write_status(|status| {
                match &mut status.temporarily.input_raw_buffer {
                    InputRawBuffer::String { bytes, offset } => {
                        let len = String::from_utf8_lossy(bytes).chars().count() as isize;
                        let position = if *offset < 0 { len + *offset } else { *offset };
                        *offset = (position + 1).min(len);
                    }
                    InputRawBuffer::Index(index) => {
                        let count = TextAlign::iter().len();
                        *index = (*index + 1) % count;
                    }
                    InputRawBuffer::None => {}
                }
                Ok(())
            })?;
        }
        KeyCode::Backspace => {
            write_status(|status| {
                if let InputRawBuffer::String { bytes, offset } =
                    &mut status.temporarily.input_raw_buffer
                {
                    let text = String::from_utf8_lossy(bytes).to_string();
                    let chars: Vec<char> = text.chars().collect();
                    let len = chars.len() as isize;
                    let position = (if *offset < 0 { len + *offset } else { *offset })
                        .clamp(0, len) as usize;
                    if position > 0 {
                        let mut chars = chars;
                        chars.remove(position - 1);
                        *bytes = chars.into_iter().collect::<String>().into_bytes();
                        *offset = position as isize - 1;
                    }
                }
                Ok(())
            })?;
        }
        KeyCode::Char(input) => {
            write_status(|status| {
                if let InputRawBuffer::String { bytes, offset } =
                    &mut status.temporarily.input_raw_buffer
                {
                    let text = String::from_utf8_lossy(bytes).to_string();
                    let mut chars: Vec<char> = text.chars().collect();
                    let len = chars.len() as isize;
                    let position = (if *offset < 0 { len + *offset } else { *offset })
                        .clamp(0, len) as usize;
                    chars.insert(position, input);
                    *bytes = chars.into_iter().collect::<String>().into_bytes();
                    *offset = position as isize + 1;
                }
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

/// Write the buffer back into the field the cursor points at, then close the
/// buffer. A buffer whose cursor no longer resolves (the record was removed
/// meanwhile) is discarded without touching the document.
fn commit_edit() -> Result<()> {
    let Some((selected_block, cursor)) = current_editor()? else {
        return Ok(());
    };

    write_status(|status| {
        let buffer = std::mem::take(&mut status.temporarily.input_raw_buffer);
        let Some(block) = status.document.content.blocks.get_mut(selected_block) else {
            return Ok(());
        };
        let Some(target) = resolve_target(block, cursor) else {
            return Ok(());
        };
        let value = match buffer {
            InputRawBuffer::String { bytes, .. } => {
                FieldValue::Text(String::from_utf8_lossy(&bytes).to_string())
            }
            InputRawBuffer::Index(index) => {
                FieldValue::Align(TextAlign::iter().nth(index).unwrap_or_default())
            }
            InputRawBuffer::None => return Ok(()),
        };
        if apply_target(block, target, value) {
            status.document.dirty = true;
        }
        Ok(())
    })?;
    Ok(())
}
