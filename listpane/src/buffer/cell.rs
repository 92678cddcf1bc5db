use crate::types::Attr;

/// One character cell in a [`Buffer`](super::Buffer).
///
/// A double-width glyph occupies its own cell plus one continuation
/// cell to its right; continuation cells are skipped when flushing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub attr: Attr,
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            attr: Attr::NONE,
            wide_continuation: false,
        }
    }
}

impl Cell {
    pub fn new(ch: char) -> Self {
        Self {
            ch,
            ..Default::default()
        }
    }

    pub fn with_attr(mut self, attr: Attr) -> Self {
        self.attr = attr;
        self
    }

    pub(crate) fn continuation(attr: Attr) -> Self {
        Self {
            ch: ' ',
            attr,
            wide_continuation: true,
        }
    }
}
