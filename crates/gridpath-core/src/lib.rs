//! **gridpath-core**: geometry and grid types shared by the gridpath crates.
//!
//! This crate provides [`Point`] coordinates, cardinal [`Direction`]s, the
//! [`Bounds`] rectangle and the validated, rectangular [`Grid`].

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Bounds, BoundsIter, Direction, Point};
pub use grid::Grid;
