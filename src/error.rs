//! Error types for grid construction and input parsing.

use thiserror::Error;

/// Errors raised when a grid cannot be built from the given data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Width or height is zero.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyDimensions { width: usize, height: usize },

    /// Cell storage does not match the declared dimensions.
    #[error("grid declared as {width}x{height} but holds {actual} cells")]
    ShapeMismatch {
        width: usize,
        height: usize,
        actual: usize,
    },

    /// A row of a textual grid has a different length than the first row.
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A character other than `#` or `.` in a textual grid.
    #[error("invalid cell character {found:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, found: char },

    /// A live-cell coordinate lies outside the grid.
    #[error("cell ({x}, {y}) is outside a grid of {height} rows and {width} columns")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// A probability outside `[0, 1]`.
    #[error("alive probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
}

/// Errors raised while reading a simulation input file.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The input has no dimensions line.
    #[error("input is empty")]
    Empty,

    /// The generations line is missing.
    #[error("missing generation count on line 2")]
    MissingGenerations,

    /// A line could not be parsed.
    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },

    /// The parsed values do not form a valid grid.
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl InputError {
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        InputError::Malformed {
            line,
            message: message.into(),
        }
    }
}
