//! Closure-driven searches, for callers that do not want to define a pather
//! type.

use std::marker::PhantomData;

use gridpath_core::Grid;

use crate::PathFinder;
use crate::error::SearchError;
use crate::finder::Path;
use crate::traits::{AstarPather, Cost, Pather, SearchState, WeightedPather};

/// Heuristic that always answers 0, turning A* into plain Dijkstra.
#[inline]
pub fn zero_heuristic<S>(_: S) -> Cost {
    0
}

/// A pather assembled from closures.
///
/// `neighbors` lists the successors of a state, `cost` prices a single step
/// and `heuristic` (zero unless set with [`with_heuristic`]) estimates the
/// remaining cost.
///
/// [`with_heuristic`]: FnPather::with_heuristic
pub struct FnPather<S, N, C, H = fn(S) -> Cost> {
    neighbors: N,
    cost: C,
    heuristic: H,
    marker: PhantomData<fn(S) -> S>,
}

impl<S, N, C> FnPather<S, N, C> {
    pub fn new(neighbors: N, cost: C) -> Self {
        Self {
            neighbors,
            cost,
            heuristic: zero_heuristic::<S>,
            marker: PhantomData,
        }
    }
}

impl<S, N, C, H> FnPather<S, N, C, H> {
    pub fn with_heuristic<H2>(self, heuristic: H2) -> FnPather<S, N, C, H2> {
        FnPather {
            neighbors: self.neighbors,
            cost: self.cost,
            heuristic,
            marker: PhantomData,
        }
    }
}

impl<S, N, I, C, H> Pather for FnPather<S, N, C, H>
where
    S: SearchState,
    N: Fn(S) -> I,
    I: IntoIterator<Item = S>,
{
    type State = S;

    fn neighbors(&self, s: S, buf: &mut Vec<S>) {
        buf.extend((self.neighbors)(s));
    }
}

impl<S, N, I, C, H> WeightedPather for FnPather<S, N, C, H>
where
    S: SearchState,
    N: Fn(S) -> I,
    I: IntoIterator<Item = S>,
    C: Fn(S, S) -> Cost,
{
    fn cost(&self, from: S, to: S) -> Cost {
        (self.cost)(from, to)
    }
}

impl<S, N, I, C, H> AstarPather for FnPather<S, N, C, H>
where
    S: SearchState,
    N: Fn(S) -> I,
    I: IntoIterator<Item = S>,
    C: Fn(S, S) -> Cost,
    H: Fn(S) -> Cost,
{
    fn estimate(&self, from: S) -> Cost {
        (self.heuristic)(from)
    }
}

/// Find a cheapest path over `grid` from `start` to any state satisfying
/// `is_goal`.
///
/// `neighbors` enumerates candidate successors, `step_cost` prices each
/// move and `heuristic` must never overestimate the remaining cost (pass
/// [`zero_heuristic`] for plain Dijkstra). Successors outside the grid are
/// discarded. Returns `Ok(None)` when no goal is reachable and an error if
/// `start` lies outside the grid.
///
/// ```
/// use gridpath_core::{Grid, Point};
/// use gridpath_paths::{find_path, manhattan};
///
/// let grid = Grid::parse("...\n...\n...").unwrap();
/// let goal = Point::new(2, 2);
/// let path = find_path(
///     &grid,
///     Point::ZERO,
///     |p| p == goal,
///     |_, _| 1,
///     |p: Point| p.neighbors_4(),
///     |p| manhattan(p, goal),
/// )
/// .unwrap()
/// .unwrap();
/// assert_eq!(path.cost(), 4);
/// assert_eq!(path.len(), 5);
/// ```
pub fn find_path<T, S, G, C, N, I, H>(
    grid: &Grid<T>,
    start: S,
    is_goal: G,
    step_cost: C,
    neighbors: N,
    heuristic: H,
) -> Result<Option<Path<S>>, SearchError>
where
    S: SearchState,
    G: Fn(S) -> bool,
    C: Fn(S, S) -> Cost,
    N: Fn(S) -> I,
    I: IntoIterator<Item = S>,
    H: Fn(S) -> Cost,
{
    let pather = FnPather::new(neighbors, step_cost).with_heuristic(heuristic);
    PathFinder::for_grid(grid).astar_path(&pather, start, is_goal)
}
