//! A scrollable, selectable list widget for character-cell terminals.
//!
//! The crate is split into a pure state core and a thin drawing layer:
//!
//! - [`Viewport`] owns the offset/current/line-count state machine and
//!   decides *what* changed after each navigation command.
//! - [`RowRenderer`] ([`SingleColumn`] and [`MultiColumn`]) decides *how
//!   much* to repaint: two rows for an in-page move, the whole visible
//!   range when the window shifted.
//! - [`ListPane`] ties them together with a selection mask and maps input
//!   events to commands.
//! - [`Terminal`] is the crossterm backend: double-buffered cells, diffed
//!   on [`Screen::flush`] so every logical operation costs one batched
//!   screen update.

pub mod buffer;
pub mod error;
pub mod event;
pub mod list;
pub mod surface;
pub mod terminal;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use error::{Error, Result};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use list::{
    column_rects, row_attr, separator_cols, Change, ColumnSpec, ListPane, MultiColumn,
    RowRenderer, SelectionMask, SingleColumn, Viewport,
};
pub use surface::{Rect, Surface};
pub use terminal::{Screen, Terminal};
pub use types::{Attr, AttrTheme, Rgb};
