//! Small UI-oriented types shared across pages.

use std::fmt;

/// Transient raw input state for the field currently being edited.
///
/// `String` carries the byte buffer plus the caret offset in characters;
/// negative offsets count from the end. `Index` carries the highlighted
/// choice of a selector field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputRawBuffer {
    None,
    Index(usize),
    String { bytes: Vec<u8>, offset: isize },
}

impl Default for InputRawBuffer {
    fn default() -> Self {
        InputRawBuffer::None
    }
}

impl fmt::Display for InputRawBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputRawBuffer::None => write!(f, ""),
            InputRawBuffer::Index(index) => write!(f, "{index}"),
            InputRawBuffer::String { bytes, .. } => match std::str::from_utf8(bytes) {
                Ok(text) => write!(f, "{text}"),
                Err(_) => write!(f, "{bytes:?}"),
            },
        }
    }
}

impl InputRawBuffer {
    /// Start a string edit seeded with `value`, caret at the end.
    pub fn from_text(value: &str) -> Self {
        InputRawBuffer::String {
            bytes: value.as_bytes().to_vec(),
            offset: value.chars().count() as isize,
        }
    }

    pub fn is_editing(&self) -> bool {
        !matches!(self, InputRawBuffer::None)
    }
}
