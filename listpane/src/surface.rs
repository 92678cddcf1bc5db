use unicode_width::UnicodeWidthChar;

use crate::buffer::{Buffer, Cell};
use crate::types::Attr;

/// Screen-absolute rectangle in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn left(&self) -> u16 {
        self.x
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn top(&self) -> u16 {
        self.y
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Rect shrunk by one cell on every side; the drawable area inside a
    /// border. Degenerates to an empty rect rather than underflowing.
    pub fn inner(self) -> Self {
        Self {
            x: self.x.saturating_add(1),
            y: self.y.saturating_add(1),
            width: self.width.saturating_sub(2),
            height: self.height.saturating_sub(2),
        }
    }
}

/// A rectangular drawing window onto a [`Buffer`].
///
/// All operations take the target buffer explicitly; a surface carries
/// geometry only, never ambient drawing state. Row and column arguments
/// are surface-relative, and anything falling outside the surface (or
/// the buffer) is silently clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    rect: Rect,
}

impl Surface {
    pub const fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub const fn rect(&self) -> Rect {
        self.rect
    }

    pub const fn width(&self) -> u16 {
        self.rect.width
    }

    pub const fn height(&self) -> u16 {
        self.rect.height
    }

    /// Replace this surface's geometry, keeping its identity.
    pub fn resize(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn abs(&self, row: u16, col: u16) -> Option<(u16, u16)> {
        if row < self.rect.height && col < self.rect.width {
            Some((self.rect.x + col, self.rect.y + row))
        } else {
            None
        }
    }

    /// Fill the whole surface with blank cells.
    pub fn clear(&self, buf: &mut Buffer) {
        for row in 0..self.rect.height {
            self.clear_line(buf, row);
        }
    }

    /// Blank a single surface row from column 0 to the right edge.
    pub fn clear_line(&self, buf: &mut Buffer, row: u16) {
        for col in 0..self.rect.width {
            if let Some((x, y)) = self.abs(row, col) {
                buf.set(x, y, Cell::default());
            }
        }
    }

    pub fn write_char(&self, buf: &mut Buffer, row: u16, col: u16, ch: char, attr: Attr) {
        let width = ch.width().unwrap_or(0) as u16;
        if width == 0 {
            return;
        }
        // A wide glyph that would be cut by the right edge is dropped.
        if col + width > self.rect.width {
            return;
        }
        if let Some((x, y)) = self.abs(row, col) {
            buf.set(x, y, Cell::new(ch).with_attr(attr));
            if width == 2 {
                buf.set(x + 1, y, Cell::continuation(attr));
            }
        }
    }

    /// Write text starting at `(row, col)`, truncated at the surface's
    /// right edge in display cells.
    pub fn write_text(&self, buf: &mut Buffer, row: u16, col: u16, text: &str, attr: Attr) {
        let mut col = col;
        for ch in text.chars() {
            let width = ch.width().unwrap_or(0) as u16;
            if width == 0 {
                continue;
            }
            if col + width > self.rect.width {
                break;
            }
            self.write_char(buf, row, col, ch, attr);
            col += width;
        }
    }

    /// Vertical run of `glyph` downward from `(row, col)`.
    pub fn vline(&self, buf: &mut Buffer, row: u16, col: u16, glyph: char, len: u16) {
        for i in 0..len {
            if let Some((x, y)) = self.abs(row + i, col) {
                buf.set(x, y, Cell::new(glyph));
            }
        }
    }

    /// Overwrite a single glyph, used for tee and corner connectors.
    pub fn set_glyph(&self, buf: &mut Buffer, row: u16, col: u16, glyph: char) {
        if let Some((x, y)) = self.abs(row, col) {
            buf.set(x, y, Cell::new(glyph));
        }
    }

    /// Single-line box border around the surface's outermost cells.
    pub fn draw_border(&self, buf: &mut Buffer) {
        let (w, h) = (self.rect.width, self.rect.height);
        if w < 2 || h < 2 {
            return;
        }

        self.set_glyph(buf, 0, 0, '┌');
        self.set_glyph(buf, 0, w - 1, '┐');
        self.set_glyph(buf, h - 1, 0, '└');
        self.set_glyph(buf, h - 1, w - 1, '┘');

        for col in 1..w - 1 {
            self.set_glyph(buf, 0, col, '─');
            self.set_glyph(buf, h - 1, col, '─');
        }
        for row in 1..h - 1 {
            self.set_glyph(buf, row, 0, '│');
            self.set_glyph(buf, row, w - 1, '│');
        }
    }
}
