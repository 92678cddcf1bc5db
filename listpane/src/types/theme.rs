use super::{Attr, Rgb};

/// Maps cell attributes to concrete colors when a buffer is flushed.
///
/// Like bare terminal defaults - light text on a dark background, an
/// inverse-video current row and an accented bold selected marker. When
/// a row is both selected and current, the current-row colors win and
/// the selected bold is kept.
#[derive(Debug, Clone)]
pub struct AttrTheme {
    pub foreground: Rgb,
    pub background: Rgb,
    pub current_fg: Rgb,
    pub current_bg: Rgb,
    pub selected_fg: Rgb,
}

impl AttrTheme {
    pub const fn new() -> Self {
        Self {
            foreground: Rgb::new(220, 220, 220),
            background: Rgb::new(0, 0, 0),
            current_fg: Rgb::new(0, 0, 0),
            current_bg: Rgb::new(180, 180, 180),
            selected_fg: Rgb::new(250, 200, 80),
        }
    }

    /// Resolve an attribute combination to `(fg, bg, bold)`.
    pub fn style(&self, attr: Attr) -> (Rgb, Rgb, bool) {
        let mut fg = self.foreground;
        let mut bg = self.background;
        let mut bold = false;

        if attr.contains(Attr::SELECTED) {
            fg = self.selected_fg;
            bold = true;
        }
        if attr.contains(Attr::CURRENT) {
            fg = self.current_fg;
            bg = self.current_bg;
        }

        (fg, bg, bold)
    }
}

impl Default for AttrTheme {
    fn default() -> Self {
        Self::new()
    }
}
