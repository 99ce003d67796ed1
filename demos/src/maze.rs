//! Reindeer maze: walk from `S` to `E` starting east, paying for every step
//! and every quarter turn.

use gridpath_core::Direction;
use gridpath_paths::{Cost, Heading, PathFinder, TurnPather};

use crate::{DemoError, find_marker, parse_map};

/// Prices for the two kinds of move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeCosts {
    pub move_cost: Cost,
    pub turn_cost: Cost,
}

impl Default for MazeCosts {
    fn default() -> Self {
        Self {
            move_cost: 1,
            turn_cost: 1000,
        }
    }
}

/// Lowest score, and the number of tiles lying on at least one lowest-score
/// route.
pub fn solve(input: &str, costs: MazeCosts) -> Result<(Cost, usize), DemoError> {
    let grid = parse_map(input)?;
    let start = find_marker(&grid, 'S')?;
    let end = find_marker(&grid, 'E')?;

    let pather =
        TurnPather::new(&grid, |&c| c != '#', costs.move_cost, costs.turn_cost).toward(end);
    let pf = PathFinder::for_grid(&grid);
    let from = Heading::new(start, Direction::East);
    let no_path = || DemoError::NoPath {
        from: start,
        to: end,
    };

    let best = pf
        .astar_path(&pather, from, |h| h.pos == end)?
        .ok_or_else(no_path)?;
    let all = pf
        .shortest_paths(&pather, from, |h| h.pos == end)?
        .ok_or_else(no_path)?;
    debug_assert_eq!(best.cost(), all.cost());

    log::info!(
        "maze: score {} over {} states, {} goal headings",
        best.cost(),
        best.len(),
        all.goals().len()
    );
    Ok((best.cost(), all.cells_on_any_path().len()))
}
