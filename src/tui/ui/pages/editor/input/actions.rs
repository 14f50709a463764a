use anyhow::{anyhow, Result};

use strum::IntoEnumIterator;

use crate::core::block::{FieldKind, FieldValue};
use crate::core::style::TextAlign;
use crate::tui::status::{
    cursor::{editor_flat, EditorCursor},
    read_status, ui::InputRawBuffer, write_status, Page,
};
use crate::tui::ui::pages::editor::input::navigation::{current_editor, set_cursor};
use crate::tui::ui::pages::editor::{apply_target, resolve_target, target_value};
use crate::tui::utils::bus::{Bus, UiToCore};

/// Enter on a field starts (or performs) the edit appropriate for its kind;
/// Enter on an add line appends a default record.
pub fn handle_enter(bus: &Bus) -> Result<()> {
    let Some((selected_block, cursor)) = current_editor()? else {
        return Ok(());
    };

    match cursor {
        EditorCursor::AddItem => {
            write_status(|status| {
                if let Some(block) = status.document.content.blocks.get_mut(selected_block) {
                    if block.append_item() {
                        status.document.dirty = true;
                    }
                }
                Ok(())
            })?;
        }
        EditorCursor::AddRow { item } => {
            write_status(|status| {
                if let Some(block) = status.document.content.blocks.get_mut(selected_block) {
                    if block.append_row(item) {
                        status.document.dirty = true;
                    }
                }
                Ok(())
            })?;
        }
        _ => {
            let target = read_status(|status| {
                Ok(status
                    .document
                    .content
                    .blocks
                    .get(selected_block)
                    .and_then(|block| {
                        resolve_target(block, cursor)
                            .map(|target| (target, target_value(block, target)))
                    }))
            })?;
            let Some((target, value)) = target else {
                return Ok(());
            };

            match target.kind() {
                FieldKind::Toggle => {
                    // Flip in place without entering edit mode
                    let flipped = match value {
                        Some(FieldValue::Toggle(on)) => !on,
                        _ => true,
                    };
                    write_status(|status| {
                        if let Some(block) =
                            status.document.content.blocks.get_mut(selected_block)
                        {
                            if apply_target(block, target, FieldValue::Toggle(flipped)) {
                                status.document.dirty = true;
                            }
                        }
                        Ok(())
                    })?;
                }
                FieldKind::Align => {
                    let current = match value {
                        Some(FieldValue::Align(align)) => TextAlign::iter()
                            .position(|candidate| candidate == align)
                            .unwrap_or(0),
                        _ => 0,
                    };
                    write_status(|status| {
                        status.temporarily.input_raw_buffer = InputRawBuffer::Index(current);
                        Ok(())
                    })?;
                }
                FieldKind::Text | FieldKind::Color => {
                    let seed = value.map(|v| v.display()).unwrap_or_default();
                    write_status(|status| {
                        status.temporarily.input_raw_buffer = InputRawBuffer::from_text(&seed);
                        Ok(())
                    })?;
                }
            }
        }
    }
    bus.ui_tx
        .send(UiToCore::Refresh)
        .map_err(|err| anyhow!(err))?;
    Ok(())
}

/// Remove the item or row the cursor sits in. A removal forbidden by the
/// block's minimum-cardinality policy is simply inert.
pub fn remove_under_cursor(bus: &Bus) -> Result<()> {
    let Some((selected_block, cursor)) = current_editor()? else {
        return Ok(());
    };

    let removed = write_status(|status| {
        let Some(block) = status.document.content.blocks.get_mut(selected_block) else {
            return Ok(false);
        };
        let removed = if let Some((item, row)) = cursor.row_index() {
            block.remove_row(item, row)
        } else if let Some(item) = cursor.item_index() {
            block.remove_item(item)
        } else {
            false
        };
        if removed {
            status.document.dirty = true;
        }
        Ok(removed)
    })?;

    if removed {
        sanitize_cursor(selected_block)?;
        bus.ui_tx
            .send(UiToCore::Refresh)
            .map_err(|err| anyhow!(err))?;
    }
    Ok(())
}

/// Move the item or row the cursor sits in and follow it to its new slot.
/// Boundary moves are no-ops.
pub fn move_under_cursor(bus: &Bus, up: bool) -> Result<()> {
    let Some((selected_block, cursor)) = current_editor()? else {
        return Ok(());
    };

    let moved = write_status(|status| {
        let Some(block) = status.document.content.blocks.get_mut(selected_block) else {
            return Ok(false);
        };
        let moved = if let Some((item, row)) = cursor.row_index() {
            if up {
                block.move_row_up(item, row)
            } else {
                block.move_row_down(item, row)
            }
        } else if let Some(item) = cursor.item_index() {
            if up {
                block.move_item_up(item)
            } else {
                block.move_item_down(item)
            }
        } else {
            false
        };
        if moved {
            status.document.dirty = true;
        }
        Ok(moved)
    })?;

    if moved {
        let followed = follow_move(cursor, up);
        set_cursor(selected_block, followed)?;
        bus.ui_tx
            .send(UiToCore::Refresh)
            .map_err(|err| anyhow!(err))?;
    }
    Ok(())
}

/// Shift the cursor's item/row index along with a successful move so the
/// selection stays on the record that was moved.
fn follow_move(cursor: EditorCursor, up: bool) -> EditorCursor {
    let step = |index: usize| if up { index - 1 } else { index + 1 };
    match cursor {
        EditorCursor::ItemField { item, field } => EditorCursor::ItemField {
            item: step(item),
            field,
        },
        EditorCursor::RowField { item, row, field } => EditorCursor::RowField {
            item,
            row: step(row),
            field,
        },
        other => other,
    }
}

/// After a removal the cursor may point past the shortened list; clamp it to
/// the nearest surviving position.
pub fn sanitize_cursor(selected_block: usize) -> Result<()> {
    let Some((_, cursor)) = current_editor()? else {
        return Ok(());
    };
    let flat = read_status(|status| {
        Ok(status
            .document
            .content
            .blocks
            .get(selected_block)
            .map(|block| editor_flat(block)))
    })?;
    let Some(flat) = flat else {
        return Ok(());
    };
    if flat.contains(&cursor) {
        return Ok(());
    }
    let fallback = flat
        .last()
        .copied()
        .unwrap_or(EditorCursor::Field { index: 0 });
    let offset = read_status(|status| {
        Ok(status
            .document
            .content
            .blocks
            .get(selected_block)
            .map(|block| crate::tui::status::cursor::editor_row(block, fallback))
            .unwrap_or(0))
    })?;
    write_status(|status| {
        status.page = Page::Editor {
            selected_block,
            view_offset: offset,
            cursor: fallback,
        };
        Ok(())
    })?;
    Ok(())
}
