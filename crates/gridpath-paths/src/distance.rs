use gridpath_core::Point;

use crate::traits::Cost;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> Cost {
    u64::from((a.row - b.row).unsigned_abs()) + u64::from((a.col - b.col).unsigned_abs())
}
