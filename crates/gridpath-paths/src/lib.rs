//! Shortest-path search over implicit, weighted grid graphs.
//!
//! Edges are never stored: a pather enumerates the successors of a state on
//! demand and prices each step. On top of that this crate provides:
//!
//! - **A\*** / **Dijkstra** cheapest path to a goal predicate
//!   ([`PathFinder::astar_path`], [`PathFinder::dijkstra_path`], [`find_path`])
//! - **All shortest paths**, keeping every tying predecessor
//!   ([`PathFinder::shortest_paths`])
//! - **Dijkstra** and **BFS** multi-source distance maps
//!   ([`PathFinder::dijkstra_map`], [`PathFinder::bfs_map`])
//! - **Flood fill** and **connected components**
//!   ([`PathFinder::flood_fill`], [`PathFinder::components`])
//!
//! States are plain [`Point`](gridpath_core::Point)s or any richer
//! [`SearchState`] such as [`Heading`], which adds a facing direction so
//! turns can carry a cost.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, flood fill, connected components |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra, all shortest paths |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod bfs;
mod cc;
mod dijkstra;
mod distance;
mod error;
mod finder;
mod pathers;
mod search;
mod traits;

pub use cc::Components;
pub use dijkstra::ShortestPaths;
pub use distance::manhattan;
pub use error::SearchError;
pub use finder::{DistanceMap, Path, PathFinder};
pub use pathers::{GridPather, Heading, SameValuePather, TurnPather};
pub use search::{FnPather, find_path, zero_heuristic};
pub use traits::{AstarPather, Cost, Pather, SearchState, WeightedPather};
