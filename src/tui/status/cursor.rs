//! Cursor types for the entry and editor pages.
//!
//! Cursors carry explicit identity for the selected element (which field,
//! which item, which nested row) so renderers and input handlers never rely
//! on fragile row-to-record conversions. Movement is computed against a flat
//! ordered list of positions rebuilt from the current document state, so a
//! cursor can never advance into records that no longer exist.

use serde::{Deserialize, Serialize};

use crate::core::block::Block;
use crate::tui::status::{read_status, Page};

/// Cursor trait to unify cursor behaviour across pages.
pub trait Cursor {
    /// Move to previous cursor position
    fn prev(self) -> Self;
    /// Move to next cursor position
    fn next(self) -> Self;
    /// Compute the view offset (number of rows the page should scroll)
    fn view_offset(&self) -> usize;
}

/// Cursor/selection on the main entry page: one row per page block, then the
/// special rows below the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryCursor {
    /// Select one of the page's blocks (index into the block list)
    Block { index: usize },
    /// Append a new block (opens the block-kind selector)
    AddBlock,
    /// Open the rendered page preview
    Preview,
    /// The about page
    About,
}

fn blocks_len() -> usize {
    read_status(|status| Ok(status.document.content.blocks.len())).unwrap_or(0)
}

impl Cursor for EntryCursor {
    fn prev(self) -> Self {
        match self {
            EntryCursor::Block { index } => {
                if index > 0 {
                    EntryCursor::Block { index: index - 1 }
                } else {
                    // Wrap to last special entry
                    EntryCursor::About
                }
            }
            EntryCursor::AddBlock => {
                let len = blocks_len();
                if len > 0 {
                    EntryCursor::Block { index: len - 1 }
                } else {
                    EntryCursor::About
                }
            }
            EntryCursor::Preview => EntryCursor::AddBlock,
            EntryCursor::About => EntryCursor::Preview,
        }
    }

    fn next(self) -> Self {
        match self {
            EntryCursor::Block { index } => {
                let len = blocks_len();
                if index + 1 < len {
                    EntryCursor::Block { index: index + 1 }
                } else {
                    EntryCursor::AddBlock
                }
            }
            EntryCursor::AddBlock => EntryCursor::Preview,
            EntryCursor::Preview => EntryCursor::About,
            EntryCursor::About => {
                // Wrap to the first block if any exist
                if blocks_len() > 0 {
                    EntryCursor::Block { index: 0 }
                } else {
                    EntryCursor::AddBlock
                }
            }
        }
    }

    fn view_offset(&self) -> usize {
        // Special rows render after the block list and one blank separator.
        let len = blocks_len();
        match self {
            EntryCursor::Block { index } => *index,
            EntryCursor::AddBlock => len + 1,
            EntryCursor::Preview => len + 2,
            EntryCursor::About => len + 3,
        }
    }
}

/// Cursor/selection inside the block editor. Fields come first, then each
/// repeater item with its fields (and, for support-hours cards, nested rows
/// plus an add-row line), then the add-item line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorCursor {
    /// A block-level field (index into the block's field table)
    Field { index: usize },
    /// A field of one repeater item
    ItemField { item: usize, field: usize },
    /// A field of one nested row within an item
    RowField { item: usize, row: usize, field: usize },
    /// The add-row line at the end of one item's row list
    AddRow { item: usize },
    /// The add-item line at the end of the item list
    AddItem,
}

impl EditorCursor {
    /// Starting position when the editor page opens.
    pub const fn first() -> Self {
        EditorCursor::Field { index: 0 }
    }

    /// Repeater item the cursor currently sits inside, if any.
    pub fn item_index(&self) -> Option<usize> {
        match self {
            EditorCursor::Field { .. } | EditorCursor::AddItem => None,
            EditorCursor::ItemField { item, .. }
            | EditorCursor::RowField { item, .. }
            | EditorCursor::AddRow { item } => Some(*item),
        }
    }

    /// Nested row the cursor currently sits on, if any.
    pub fn row_index(&self) -> Option<(usize, usize)> {
        match self {
            EditorCursor::RowField { item, row, .. } => Some((*item, *row)),
            _ => None,
        }
    }
}

/// Flat ordered list of every cursor position the current block offers.
pub fn editor_flat(block: &Block) -> Vec<EditorCursor> {
    let mut flat: Vec<EditorCursor> = Vec::new();
    for index in 0..block.field_specs().len() {
        flat.push(EditorCursor::Field { index });
    }
    let item_fields = block.item_specs().len();
    let row_fields = block.row_specs().len();
    for item in 0..block.items_len() {
        for field in 0..item_fields {
            flat.push(EditorCursor::ItemField { item, field });
        }
        if block.supports_rows() {
            for row in 0..block.rows_len(item) {
                for field in 0..row_fields {
                    flat.push(EditorCursor::RowField { item, row, field });
                }
            }
            flat.push(EditorCursor::AddRow { item });
        }
    }
    if block.item_noun().is_some() {
        flat.push(EditorCursor::AddItem);
    }
    flat
}

/// Display row the cursor lands on in the editor layout. Mirrors the render
/// order: field rows, a blank separator, then each item as a header row plus
/// its field/row lines, each item followed by a blank line.
pub fn editor_row(block: &Block, cursor: EditorCursor) -> usize {
    let fields = block.field_specs().len();
    let item_fields = block.item_specs().len();
    let row_fields = block.row_specs().len();

    let item_height = |item: usize| -> usize {
        let rows_part = if block.supports_rows() {
            row_fields * block.rows_len(item) + 1
        } else {
            0
        };
        1 + item_fields + rows_part
    };
    let item_start = |item: usize| -> usize {
        let mut row = fields + 1;
        for j in 0..item {
            row += item_height(j) + 1;
        }
        row
    };

    match cursor {
        EditorCursor::Field { index } => index,
        EditorCursor::ItemField { item, field } => item_start(item) + 1 + field,
        EditorCursor::RowField { item, row, field } => {
            item_start(item) + 1 + item_fields + row_fields * row + field
        }
        EditorCursor::AddRow { item } => {
            item_start(item) + 1 + item_fields + row_fields * block.rows_len(item)
        }
        EditorCursor::AddItem => item_start(block.items_len()),
    }
}

fn editor_block() -> Option<Block> {
    read_status(|status| {
        if let Page::Editor { selected_block, .. } = &status.page {
            Ok(status.document.content.blocks.get(*selected_block).cloned())
        } else {
            Ok(None)
        }
    })
    .ok()
    .flatten()
}

impl Cursor for EditorCursor {
    fn prev(self) -> Self {
        let Some(block) = editor_block() else {
            return self;
        };
        let flat = editor_flat(&block);
        let position = flat.iter().position(|c| *c == self).unwrap_or(0);
        if position == 0 {
            // stay at the first position (do not wrap)
            flat.first().copied().unwrap_or(self)
        } else {
            flat[position - 1]
        }
    }

    fn next(self) -> Self {
        let Some(block) = editor_block() else {
            return self;
        };
        let flat = editor_flat(&block);
        let position = flat.iter().position(|c| *c == self).unwrap_or(0);
        if position + 1 >= flat.len() {
            // stay at the last position (do not wrap)
            flat.last().copied().unwrap_or(self)
        } else {
            flat[position + 1]
        }
    }

    fn view_offset(&self) -> usize {
        match editor_block() {
            Some(block) => editor_row(&block, *self),
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::block::BlockKind;

    #[test]
    fn test_editor_flat_covers_nested_rows() {
        let mut block = BlockKind::SupportHours.create();
        block.append_item();
        block.append_row(0);
        let flat = editor_flat(&block);

        // block fields, then card title field, row fields, add-row, add-item
        assert!(flat.contains(&EditorCursor::Field { index: 0 }));
        assert!(flat.contains(&EditorCursor::ItemField { item: 0, field: 0 }));
        assert!(flat.contains(&EditorCursor::RowField {
            item: 0,
            row: 0,
            field: 1
        }));
        assert!(flat.contains(&EditorCursor::AddRow { item: 0 }));
        assert_eq!(flat.last(), Some(&EditorCursor::AddItem));
    }

    #[test]
    fn test_editor_flat_without_repeater_has_no_add_line() {
        let block = BlockKind::ContactForm.create();
        let flat = editor_flat(&block);
        assert_eq!(flat.len(), block.field_specs().len());
        assert!(!flat.contains(&EditorCursor::AddItem));
    }

    #[test]
    fn test_editor_rows_are_strictly_increasing() {
        let mut block = BlockKind::SupportHours.create();
        block.append_item();
        block.append_row(0);
        block.append_item();
        let flat = editor_flat(&block);
        let rows: Vec<usize> = flat
            .iter()
            .map(|cursor| editor_row(&block, *cursor))
            .collect();
        for pair in rows.windows(2) {
            assert!(pair[0] < pair[1], "rows must increase: {rows:?}");
        }
    }
}
