use thiserror::Error;

pub type Result<T> = std::result::Result<T, GridError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("row {row} has {found} cells, expected {expected}")]
    InvalidShape {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    #[error("cell ({x}, {y}) is outside of a {width}x{height} grid")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("invalid cell value {value:?} at ({x}, {y})")]
    InvalidCell {
        x: usize,
        y: usize,
        value: String,
    },
}
