use gridpath_core::{GridError, Point};
use gridpath_paths::SearchError;
use thiserror::Error;

/// Failures while parsing or solving a puzzle input.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("bad grid: {0}")]
    Grid(#[from] GridError),

    #[error("search failed: {0}")]
    Search(#[from] SearchError),

    #[error("input has no '{0}' cell")]
    MissingMarker(char),

    /// A line of a line-oriented input does not parse.
    #[error("line {line}: expected {expected}, found {text:?}")]
    InvalidLine {
        line: usize,
        expected: &'static str,
        text: String,
    },

    #[error("no path from {from} to {to}")]
    NoPath { from: Point, to: Point },
}
