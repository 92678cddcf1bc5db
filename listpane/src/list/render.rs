use crate::buffer::Buffer;
use crate::error::{Error, Result};
use crate::list::columns::{column_rects, separator_cols, ColumnSpec};
use crate::list::selection::SelectionMask;
use crate::list::viewport::Viewport;
use crate::surface::{Rect, Surface};
use crate::types::Attr;

/// Attribute combination for one row: current-row highlight and
/// selected-row marker combine, they do not replace each other.
pub fn row_attr(view: &Viewport, selection: &SelectionMask, index: usize) -> Attr {
    let mut attr = Attr::NONE;
    if index == view.current() {
        attr |= Attr::CURRENT;
    }
    if selection.is_selected(index) {
        attr |= Attr::SELECTED;
    }
    attr
}

fn visible_line(view: &Viewport, index: usize) -> Option<u16> {
    view.is_visible(index)
        .then(|| (index - view.offset()) as u16)
}

/// How rows reach the screen. The viewport state machine decides *what*
/// changed; a renderer decides *how much* to repaint.
///
/// Implementations own the row data, the widget geometry, and any
/// per-column render targets. [`draw_row`](Self::draw_row) for an index
/// outside the visible window is a deliberate no-op, not an error.
pub trait RowRenderer {
    type Row;

    /// Replace the row data wholesale, validating it first.
    fn set_rows(&mut self, rows: Vec<Self::Row>) -> Result<()>;

    fn row_count(&self) -> usize;

    /// Recompute geometry for a new widget area. Called on creation and
    /// on every resize; resolved column widths are cached until then.
    fn layout(&mut self, area: Rect) -> Result<()>;

    /// The full widget rectangle, border included.
    fn area(&self) -> Rect;

    /// The rectangle rows are drawn into (inside any border).
    fn viewport(&self) -> Rect;

    /// Border and column separators; drawn once per layout, not per row.
    fn draw_chrome(&self, buf: &mut Buffer);

    fn draw_row(&self, buf: &mut Buffer, view: &Viewport, index: usize, attr: Attr);

    /// Clear the row area and repaint the whole visible range.
    fn draw_window(&self, buf: &mut Buffer, view: &Viewport, selection: &SelectionMask);
}

/// Renderer for a list of plain strings.
#[derive(Debug, Clone)]
pub struct SingleColumn {
    rows: Vec<String>,
    surface: Surface,
    bordered: bool,
}

impl SingleColumn {
    pub fn new(rows: Vec<String>) -> Self {
        Self {
            rows,
            surface: Surface::new(Rect::default()),
            bordered: false,
        }
    }

    pub fn bordered(mut self, on: bool) -> Self {
        self.bordered = on;
        self
    }
}

impl RowRenderer for SingleColumn {
    type Row = String;

    fn set_rows(&mut self, rows: Vec<String>) -> Result<()> {
        self.rows = rows;
        Ok(())
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn layout(&mut self, area: Rect) -> Result<()> {
        self.surface.resize(area);
        Ok(())
    }

    fn area(&self) -> Rect {
        self.surface.rect()
    }

    fn viewport(&self) -> Rect {
        if self.bordered {
            self.surface.rect().inner()
        } else {
            self.surface.rect()
        }
    }

    fn draw_chrome(&self, buf: &mut Buffer) {
        if self.bordered {
            self.surface.draw_border(buf);
        }
    }

    fn draw_row(&self, buf: &mut Buffer, view: &Viewport, index: usize, attr: Attr) {
        let Some(line) = visible_line(view, index) else {
            return;
        };
        let inner = Surface::new(self.viewport());
        inner.clear_line(buf, line);
        inner.write_text(buf, line, 0, &self.rows[index], attr);
    }

    fn draw_window(&self, buf: &mut Buffer, view: &Viewport, selection: &SelectionMask) {
        let inner = Surface::new(self.viewport());
        inner.clear(buf);
        for index in view.offset()..view.offset() + view.line_count() {
            self.draw_row(buf, view, index, row_attr(view, selection, index));
        }
    }
}

/// Renderer for rows of fixed-arity string tuples, one sub-surface per
/// column. Every row must have exactly as many fields as the column
/// spec; this is checked when data is loaded, never at draw time.
#[derive(Debug, Clone)]
pub struct MultiColumn {
    rows: Vec<Vec<String>>,
    spec: ColumnSpec,
    widths: Vec<u16>,
    columns: Vec<Surface>,
    surface: Surface,
    bordered: bool,
}

impl MultiColumn {
    pub fn new(rows: Vec<Vec<String>>, spec: ColumnSpec) -> Result<Self> {
        validate_rows(&rows, spec.len())?;
        let columns = vec![Surface::new(Rect::default()); spec.len()];
        Ok(Self {
            rows,
            spec,
            widths: Vec::new(),
            columns,
            surface: Surface::new(Rect::default()),
            bordered: false,
        })
    }

    pub fn bordered(mut self, on: bool) -> Self {
        self.bordered = on;
        self
    }

    /// Concrete widths from the last layout.
    pub fn widths(&self) -> &[u16] {
        &self.widths
    }
}

fn validate_rows(rows: &[Vec<String>], expected: usize) -> Result<()> {
    for (index, row) in rows.iter().enumerate() {
        if row.len() != expected {
            return Err(Error::MalformedRow {
                index,
                expected,
                found: row.len(),
            });
        }
    }
    Ok(())
}

impl RowRenderer for MultiColumn {
    type Row = Vec<String>;

    fn set_rows(&mut self, rows: Vec<Vec<String>>) -> Result<()> {
        validate_rows(&rows, self.spec.len())?;
        self.rows = rows;
        Ok(())
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn layout(&mut self, area: Rect) -> Result<()> {
        self.surface.resize(area);
        let inner = self.viewport();
        self.widths = self.spec.resolve(inner.width)?;
        log::debug!(
            "[list] resolved column widths {:?} in {} cells",
            self.widths,
            inner.width
        );
        for (column, rect) in self.columns.iter_mut().zip(column_rects(inner, &self.widths)) {
            column.resize(rect);
        }
        Ok(())
    }

    fn area(&self) -> Rect {
        self.surface.rect()
    }

    fn viewport(&self) -> Rect {
        if self.bordered {
            self.surface.rect().inner()
        } else {
            self.surface.rect()
        }
    }

    fn draw_chrome(&self, buf: &mut Buffer) {
        if self.bordered {
            self.surface.draw_border(buf);
        }
        let inset = u16::from(self.bordered);
        let height = self.viewport().height;
        for col in separator_cols(&self.widths) {
            let col = col + inset;
            self.surface.vline(buf, inset, col, '│', height);
            if self.bordered && self.surface.height() >= 2 {
                self.surface.set_glyph(buf, 0, col, '┬');
                self.surface
                    .set_glyph(buf, self.surface.height() - 1, col, '┴');
            }
        }
    }

    fn draw_row(&self, buf: &mut Buffer, view: &Viewport, index: usize, attr: Attr) {
        let Some(line) = visible_line(view, index) else {
            return;
        };
        for (column, text) in self.columns.iter().zip(&self.rows[index]) {
            column.clear_line(buf, line);
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (None, _) => {}
                // Single-character cells go through the char primitive.
                (Some(ch), None) => column.write_char(buf, line, 0, ch, attr),
                _ => column.write_text(buf, line, 0, text, attr),
            }
        }
    }

    fn draw_window(&self, buf: &mut Buffer, view: &Viewport, selection: &SelectionMask) {
        for column in &self.columns {
            column.clear(buf);
        }
        for index in view.offset()..view.offset() + view.line_count() {
            self.draw_row(buf, view, index, row_attr(view, selection, index));
        }
    }
}
