//! Grid puzzles solved with gridpath.
//!
//! Each module parses one puzzle input and answers its two questions:
//!
//! - [`maze`]: cheapest route with a turn penalty, and every tile on a best route
//! - [`ram_run`]: BFS through a filling memory grid
//! - [`race`]: shortcut counting from two BFS distance maps
//! - [`garden`]: region areas, perimeters and side counts
//! - [`trails`]: reachable summits and distinct hiking trails
//! - [`chiton`]: A* across a risk map and its 5×5 tiling
//!
//! The `gridpath` binary exposes them on the command line.

pub mod chiton;
pub mod error;
pub mod garden;
pub mod logger;
pub mod maze;
pub mod race;
pub mod ram_run;
pub mod trails;

pub use error::DemoError;

use gridpath_core::{Grid, Point};

/// Parse a character map, ignoring surrounding blank lines.
pub(crate) fn parse_map(input: &str) -> Result<Grid<char>, DemoError> {
    let grid = Grid::parse(input.trim())?;
    log::debug!("parsed {} map", grid.bounds());
    Ok(grid)
}

/// Position of the unique cell holding `marker`.
pub(crate) fn find_marker(grid: &Grid<char>, marker: char) -> Result<Point, DemoError> {
    grid.find(|&c| c == marker)
        .ok_or(DemoError::MissingMarker(marker))
}
