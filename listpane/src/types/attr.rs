use std::ops::{BitOr, BitOrAssign};

/// Opaque display attribute attached to a cell.
///
/// The widget core only ever combines and compares attributes; what a
/// combination looks like on screen is decided by an [`AttrTheme`] at
/// flush time. Attributes combine with `|`, they never replace each
/// other: a row that is both current and selected carries both bits.
///
/// [`AttrTheme`]: crate::types::AttrTheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Attr(u8);

impl Attr {
    /// No attribute; the theme's plain text style.
    pub const NONE: Attr = Attr(0);
    /// Highlight for the single current (focused) row.
    pub const CURRENT: Attr = Attr(1);
    /// Marker for rows set in the selection mask.
    pub const SELECTED: Attr = Attr(1 << 1);

    pub const fn contains(self, other: Attr) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Attr {
    type Output = Attr;

    fn bitor(self, rhs: Attr) -> Attr {
        Attr(self.0 | rhs.0)
    }
}

impl BitOrAssign for Attr {
    fn bitor_assign(&mut self, rhs: Attr) {
        self.0 |= rhs.0;
    }
}
