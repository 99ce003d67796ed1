use gridpath_core::{Bounds, Point};
use thiserror::Error;

/// Precondition violations detected before a search starts.
///
/// An unreachable goal is not an error; searches report it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("start {start} is outside the {bounds} grid")]
    StartOutOfBounds { start: Point, bounds: Bounds },
    #[error("cannot search an empty {0} grid")]
    EmptyBounds(Bounds),
}
