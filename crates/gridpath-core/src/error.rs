use thiserror::Error;

use crate::geom::{Bounds, Point};

/// Errors raised while building or mutating a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// No rows, or rows without columns.
    #[error("grid is empty")]
    Empty,
    /// A row whose length differs from the first row.
    #[error("grid row {row} has {found} cells, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character the cell parser rejected.
    #[error("invalid character {ch:?} at {pos}")]
    InvalidChar { ch: char, pos: Point },
    /// A write outside the grid.
    #[error("{pos} is outside the {bounds} grid")]
    OutOfBounds { pos: Point, bounds: Bounds },
    /// A flat cell buffer that does not match the requested size.
    #[error("expected {expected} cells, got {found}")]
    SizeMismatch { expected: usize, found: usize },
}
