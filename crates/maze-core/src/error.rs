use std::fmt;

use crate::Coord;

/// Which end of a search a coordinate was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Input rejected before any search work is done.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InvalidInputError {
    /// The grid has no rows, or its rows have no cells.
    #[error("grid is empty")]
    EmptyGrid,

    /// A row's length differs from the first row's.
    #[error("grid is not rectangular: row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The cell count `rows * cols` does not fit in memory addressing.
    #[error("grid of {rows}x{cols} cells is too large")]
    TooLarge { rows: usize, cols: usize },

    /// A token in a textual grid is not an integer.
    #[error("line {line}: cannot parse cell value {token:?}")]
    BadCell { line: usize, token: String },

    /// A start or goal coordinate lies outside the grid.
    #[error("{endpoint} {coord} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        coord: Coord,
        rows: usize,
        cols: usize,
    },
}
