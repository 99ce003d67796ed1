//! Garden fencing: price every region of same-letter plots.

use gridpath_core::{Direction, Point};
use gridpath_paths::{Components, PathFinder, SameValuePather};

use crate::{DemoError, parse_map};

/// Area, perimeter and side count of one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub area: usize,
    pub perimeter: usize,
    pub sides: usize,
}

fn measure(cc: &Components, label: usize, cells: &[Point]) -> Region {
    let inside = |p: Point| cc.label_at(p) == Some(label);
    let mut perimeter = 0;
    let mut corners = 0;
    for &p in cells {
        perimeter += p.neighbors_4().into_iter().filter(|&n| !inside(n)).count();
        for a in Direction::ALL {
            let b = a.turn_right();
            let (in_a, in_b) = (inside(p.step(a)), inside(p.step(b)));
            let convex = !in_a && !in_b;
            let concave = in_a && in_b && !inside(p.step(a).step(b));
            if convex || concave {
                corners += 1;
            }
        }
    }
    // A polygon has as many sides as corners.
    Region {
        area: cells.len(),
        perimeter,
        sides: corners,
    }
}

/// Every region of the map, in row-major order of its first plot.
pub fn regions(input: &str) -> Result<Vec<Region>, DemoError> {
    let grid = parse_map(input)?;
    let cc = PathFinder::for_grid(&grid).components(&SameValuePather::new(&grid));
    log::debug!("garden: {} regions", cc.len());
    Ok(cc
        .regions()
        .iter()
        .enumerate()
        .map(|(label, cells)| measure(&cc, label, cells))
        .collect())
}

/// Fence price by perimeter, and the bulk price by number of sides.
pub fn solve(input: &str) -> Result<(usize, usize), DemoError> {
    let regions = regions(input)?;
    Ok((
        regions.iter().map(|r| r.area * r.perimeter).sum(),
        regions.iter().map(|r| r.area * r.sides).sum(),
    ))
}
