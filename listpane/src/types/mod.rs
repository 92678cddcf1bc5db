mod attr;
mod color;
mod theme;

pub use attr::Attr;
pub use color::Rgb;
pub use theme::AttrTheme;
