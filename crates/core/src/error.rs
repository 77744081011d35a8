//! Error types for synical

use thiserror::Error;

/// Main error type for synical operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Feature matrix has {rows} channels, at least {required} required")]
    InsufficientChannels { rows: usize, required: usize },

    #[error("Feature row {row} out of bounds for matrix with {rows} rows")]
    RowOutOfBounds { row: usize, rows: usize },

    #[error("Index out of bounds: ({row}, {col}) in matrix of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Matrix size mismatch: expected {expected} values, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Invalid matrix data at line {line}: {reason}")]
    ParseMatrix { line: usize, reason: String },

    #[error("Empty feature matrix")]
    EmptyMatrix,

    #[error("{0}")]
    Other(String),
}

/// Result type alias for synical operations
pub type Result<T> = std::result::Result<T, Error>;
