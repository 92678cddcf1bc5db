use crate::error::{Error, Result};
use crate::surface::Rect;

/// Per-column width specification for a multi-column list.
///
/// A `0` entry is an auto column: the leftover width after fixed columns
/// and separators is divided among auto columns left to right, with any
/// remainder landing on the earliest ones one cell at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    widths: Vec<u16>,
}

impl ColumnSpec {
    pub fn new(widths: Vec<u16>) -> Self {
        Self { widths }
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Resolve to concrete widths inside `available` cells, accounting
    /// for one separator cell between adjacent columns.
    ///
    /// With at least one auto column the resolved widths plus separators
    /// always sum to exactly `available`. With none, the fixed widths
    /// must match `available` exactly; a shortfall or an overflow is a
    /// layout error, reported here rather than at draw time.
    pub fn resolve(&self, available: u16) -> Result<Vec<u16>> {
        let separators = self.widths.len().saturating_sub(1) as u16;
        let fixed: u16 = self.widths.iter().sum();
        let required = fixed + separators;
        if required > available {
            return Err(Error::ColumnOverflow {
                required,
                available,
            });
        }

        let mut leftover = available - required;
        let mut auto = self.widths.iter().filter(|&&w| w == 0).count() as u16;
        if auto == 0 {
            if leftover > 0 {
                return Err(Error::UnassignedWidth { leftover });
            }
            return Ok(self.widths.clone());
        }

        let mut resolved = Vec::with_capacity(self.widths.len());
        for &w in &self.widths {
            if w == 0 {
                let share = leftover.div_ceil(auto);
                resolved.push(share);
                leftover -= share;
                auto -= 1;
            } else {
                resolved.push(w);
            }
        }
        debug_assert_eq!(leftover, 0, "leftover width not fully consumed");
        Ok(resolved)
    }
}

/// Position one sub-rect per column inside `inner`, left to right, with
/// one separator cell between neighbors.
pub fn column_rects(inner: Rect, widths: &[u16]) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(widths.len());
    let mut x = inner.x;
    for &w in widths {
        rects.push(Rect::new(x, inner.y, w, inner.height));
        x += w + 1;
    }
    rects
}

/// Column offsets (relative to `inner`'s left edge) of the separator
/// rules between adjacent columns.
pub fn separator_cols(widths: &[u16]) -> Vec<u16> {
    let mut cols = Vec::new();
    let mut x = 0;
    for &w in widths.iter().take(widths.len().saturating_sub(1)) {
        x += w;
        cols.push(x);
        x += 1;
    }
    cols
}
