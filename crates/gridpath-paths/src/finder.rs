use std::collections::{BinaryHeap, HashMap};

use gridpath_core::{Bounds, Grid, Point};

use crate::error::SearchError;
use crate::traits::{Cost, SearchState};

/// A path found by a search: every state from the start to a goal state,
/// plus its total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path<S> {
    states: Vec<S>,
    cost: Cost,
}

impl<S: SearchState> Path<S> {
    pub(crate) fn new(states: Vec<S>, cost: Cost) -> Self {
        Self { states, cost }
    }

    /// Total cost of the path.
    #[inline]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The states in order, both endpoints included.
    #[inline]
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// Number of states on the path (a start-is-goal path has one).
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The goal state the path ends on.
    pub fn goal(&self) -> Option<S> {
        self.states.last().copied()
    }

    /// Grid cells along the path.
    ///
    /// For direction-augmented states a cell may repeat where the path turns
    /// in place.
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.states.iter().map(|s| s.pos())
    }

    pub fn into_states(self) -> Vec<S> {
        self.states
    }
}

/// Best-known costs from the sources of a [`dijkstra_map`] or [`bfs_map`]
/// call.
///
/// [`dijkstra_map`]: PathFinder::dijkstra_map
/// [`bfs_map`]: PathFinder::bfs_map
#[derive(Debug, Clone, Default)]
pub struct DistanceMap<S> {
    dist: HashMap<S, Cost>,
    by_pos: HashMap<Point, Cost>,
}

impl<S: SearchState> DistanceMap<S> {
    pub(crate) fn from_table(dist: HashMap<S, Cost>) -> Self {
        let mut by_pos: HashMap<Point, Cost> = HashMap::with_capacity(dist.len());
        for (s, &c) in &dist {
            by_pos
                .entry(s.pos())
                .and_modify(|best| *best = (*best).min(c))
                .or_insert(c);
        }
        Self { dist, by_pos }
    }

    /// Cost to reach `s`, or `None` if it was not reached.
    #[inline]
    pub fn get(&self, s: &S) -> Option<Cost> {
        self.dist.get(s).copied()
    }

    #[inline]
    pub fn contains(&self, s: &S) -> bool {
        self.dist.contains_key(s)
    }

    /// Cheapest cost over every reached state located at `p`.
    #[inline]
    pub fn nearest_at(&self, p: Point) -> Option<Cost> {
        self.by_pos.get(&p).copied()
    }

    /// Number of reached states.
    #[inline]
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// Reached states and their costs, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (S, Cost)> + '_ {
        self.dist.iter().map(|(&s, &c)| (s, c))
    }
}

// ---------------------------------------------------------------------------
// Frontier for A*/Dijkstra priority-queue searches
// ---------------------------------------------------------------------------

/// Frontier entry, ordered by priority then insertion sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NodeRef<S> {
    pub(crate) f: Cost,
    pub(crate) seq: u64,
    pub(crate) g: Cost,
    pub(crate) state: S,
}

impl<S: Eq> Ord for NodeRef<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and the
        // earliest insertion among equal priorities.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl<S: Eq> PartialOrd for NodeRef<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

pub(crate) struct Frontier<S> {
    heap: BinaryHeap<NodeRef<S>>,
    seq: u64,
}

impl<S: Eq> Frontier<S> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub(crate) fn push(&mut self, f: Cost, g: Cost, state: S) {
        self.heap.push(NodeRef {
            f,
            seq: self.seq,
            g,
            state,
        });
        self.seq += 1;
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<NodeRef<S>> {
        self.heap.pop()
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Entry point for every search on a grid rectangle.
///
/// A `PathFinder` only remembers the bounds it searches in. Every call
/// builds its own frontier, distance and predecessor tables and drops them
/// on return, so one finder can serve any number of calls, from any number
/// of threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathFinder {
    bounds: Bounds,
}

impl PathFinder {
    /// Create a finder for the given bounds. Empty bounds are rejected.
    pub fn new(bounds: Bounds) -> Result<Self, SearchError> {
        if bounds.is_empty() {
            return Err(SearchError::EmptyBounds(bounds));
        }
        Ok(Self { bounds })
    }

    /// Create a finder covering `grid`.
    pub fn for_grid<T>(grid: &Grid<T>) -> Self {
        Self {
            bounds: grid.bounds(),
        }
    }

    /// The rectangle being searched.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub(crate) fn in_bounds<S: SearchState>(&self, s: &S) -> bool {
        self.bounds.contains(s.pos())
    }

    pub(crate) fn check_start<S: SearchState>(&self, start: &S) -> Result<(), SearchError> {
        if self.in_bounds(start) {
            Ok(())
        } else {
            Err(SearchError::StartOutOfBounds {
                start: start.pos(),
                bounds: self.bounds,
            })
        }
    }
}

/// Walk single predecessor links back from `goal`.
pub(crate) fn rebuild<S: SearchState>(parents: &HashMap<S, S>, goal: S) -> Vec<S> {
    let mut path = vec![goal];
    let mut cur = goal;
    while let Some(&p) = parents.get(&cur) {
        path.push(p);
        cur = p;
    }
    path.reverse();
    path
}
