use std::fmt;
use std::hash::Hash;

use gridpath_core::Point;

/// Cost of a step or a path. Always non-negative.
pub type Cost = u64;

/// A node of the search space.
///
/// Usually a plain [`Point`]; direction-sensitive searches augment it with
/// extra context (see [`Heading`](crate::Heading)). The finder uses
/// [`pos`](Self::pos) to keep every state inside the grid.
pub trait SearchState: Copy + Eq + Hash + Ord + fmt::Debug {
    /// The grid cell this state occupies.
    fn pos(&self) -> Point;
}

impl SearchState for Point {
    #[inline]
    fn pos(&self) -> Point {
        *self
    }
}

/// Minimal search interface: neighbor enumeration.
pub trait Pather {
    type State: SearchState;

    /// Append candidate successors of `s` into `buf`. The caller clears
    /// `buf` before calling and discards out-of-grid states afterwards.
    fn neighbors(&self, s: Self::State, buf: &mut Vec<Self::State>);
}

/// Pather with weighted (non-negative) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to its successor `to`.
    fn cost(&self, from: Self::State, to: Self::State) -> Cost;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Estimate of the remaining cost from `from` to the goal.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Self::State) -> Cost;
}
