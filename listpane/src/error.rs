use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A multi-column row whose field count does not match the column
    /// spec. Caught when data is loaded, never deferred into a draw call.
    #[error("row {index} has {found} fields, expected {expected}")]
    MalformedRow {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// Fixed column widths plus separators exceed the available width.
    #[error("fixed columns and separators need {required} cells, only {available} available")]
    ColumnOverflow { required: u16, available: u16 },

    /// All columns are fixed-width and cells are left unassigned.
    #[error("{leftover} cells left over with no auto column to absorb them")]
    UnassignedWidth { leftover: u16 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
