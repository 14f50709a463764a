pub mod input;
pub mod render;

pub use render::render;

use crate::core::block::{Block, FieldKind, FieldValue};
use crate::tui::status::cursor::EditorCursor;

/// A concrete editable field the cursor points at, resolved against the
/// block's field tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTarget {
    Block {
        key: &'static str,
        kind: FieldKind,
    },
    Item {
        item: usize,
        key: &'static str,
        kind: FieldKind,
    },
    Row {
        item: usize,
        row: usize,
        key: &'static str,
        kind: FieldKind,
    },
}

impl FieldTarget {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldTarget::Block { kind, .. }
            | FieldTarget::Item { kind, .. }
            | FieldTarget::Row { kind, .. } => *kind,
        }
    }
}

/// Resolve the cursor to the field it selects, if it selects one at all
/// (add-item/add-row lines resolve to `None`).
pub fn resolve_target(block: &Block, cursor: EditorCursor) -> Option<FieldTarget> {
    match cursor {
        EditorCursor::Field { index } => {
            let spec = block.field_specs().get(index)?;
            Some(FieldTarget::Block {
                key: spec.key,
                kind: spec.kind,
            })
        }
        EditorCursor::ItemField { item, field } => {
            let spec = block.item_specs().get(field)?;
            (item < block.items_len()).then_some(FieldTarget::Item {
                item,
                key: spec.key,
                kind: spec.kind,
            })
        }
        EditorCursor::RowField { item, row, field } => {
            let spec = block.row_specs().get(field)?;
            (row < block.rows_len(item)).then_some(FieldTarget::Row {
                item,
                row,
                key: spec.key,
                kind: spec.kind,
            })
        }
        EditorCursor::AddRow { .. } | EditorCursor::AddItem => None,
    }
}

/// Current value of the targeted field.
pub fn target_value(block: &Block, target: FieldTarget) -> Option<FieldValue> {
    match target {
        FieldTarget::Block { key, .. } => block.field(key),
        FieldTarget::Item { item, key, .. } => block.item_field(item, key),
        FieldTarget::Row { item, row, key, .. } => block.row_field(item, row, key),
    }
}

/// Write `value` into the targeted field.
pub fn apply_target(block: &mut Block, target: FieldTarget, value: FieldValue) -> bool {
    match target {
        FieldTarget::Block { key, .. } => {
            block.set_field(key, value);
            true
        }
        FieldTarget::Item { item, key, .. } => block.set_item_field(item, key, value),
        FieldTarget::Row { item, row, key, .. } => block.set_row_field(item, row, key, value),
    }
}
