mod columns;
mod pane;
mod render;
mod selection;
mod viewport;

pub use columns::{column_rects, separator_cols, ColumnSpec};
pub use pane::ListPane;
pub use render::{row_attr, MultiColumn, RowRenderer, SingleColumn};
pub use selection::SelectionMask;
pub use viewport::{Change, Viewport};
