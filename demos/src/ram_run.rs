//! Memory space escape: bytes fall onto a square grid one at a time, and
//! the walker needs a way from the top-left corner to the bottom-right one.

use gridpath_core::{Grid, GridError, Point};
use gridpath_paths::{Cost, GridPather, PathFinder};

use crate::DemoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RamRunConfig {
    /// Side length of the memory space.
    pub size: usize,
    /// How many bytes have fallen for the first question.
    pub fallen: usize,
}

impl Default for RamRunConfig {
    fn default() -> Self {
        Self {
            size: 71,
            fallen: 1024,
        }
    }
}

/// Parse `x,y` lines into positions (`x` is the column).
pub fn parse_bytes(input: &str) -> Result<Vec<Point>, DemoError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| {
            let invalid = || DemoError::InvalidLine {
                line: i + 1,
                expected: "x,y",
                text: l.to_string(),
            };
            let (x, y) = l.trim().split_once(',').ok_or_else(invalid)?;
            let x: i32 = x.trim().parse().map_err(|_| invalid())?;
            let y: i32 = y.trim().parse().map_err(|_| invalid())?;
            Ok(Point::new(y, x))
        })
        .collect()
}

/// Memory space with the first `count` bytes marked corrupted.
fn corrupted(size: usize, bytes: &[Point], count: usize) -> Result<Grid<bool>, DemoError> {
    let mut grid = Grid::filled(size, size, false)?;
    for &b in bytes.iter().take(count) {
        grid.set(b, true)?;
    }
    Ok(grid)
}

/// Steps from corner to corner, or `None` if the exit is cut off.
fn escape_steps(grid: &Grid<bool>) -> Result<Option<Cost>, DemoError> {
    let start = Point::ZERO;
    let exit = grid.bounds().last().ok_or(GridError::Empty)?;
    if grid.get(start) != Some(&false) {
        return Ok(None);
    }
    let pather = GridPather::new(grid, |&bad| (!bad).then_some(1));
    let dist = PathFinder::for_grid(grid).bfs_map(&pather, &[start], None);
    Ok(dist.get(&exit))
}

/// Fewest steps to the exit once `cfg.fallen` bytes are down.
pub fn min_steps(bytes: &[Point], cfg: RamRunConfig) -> Result<Cost, DemoError> {
    let grid = corrupted(cfg.size, bytes, cfg.fallen)?;
    let exit = grid.bounds().last().ok_or(GridError::Empty)?;
    escape_steps(&grid)?.ok_or(DemoError::NoPath {
        from: Point::ZERO,
        to: exit,
    })
}

/// The first byte whose fall cuts the exit off, if any does.
pub fn first_blocker(bytes: &[Point], size: usize) -> Result<Option<Point>, DemoError> {
    // Reachability only gets worse as bytes fall, so bisect on the count.
    let (mut lo, mut hi) = (0, bytes.len());
    if escape_steps(&corrupted(size, bytes, hi)?)?.is_some() {
        return Ok(None);
    }
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if escape_steps(&corrupted(size, bytes, mid)?)?.is_some() {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    log::debug!("ram run: exit cut off after {hi} bytes");
    Ok(Some(bytes[hi - 1]))
}

/// Both answers; the blocker is reported as `x,y`.
pub fn solve(input: &str, cfg: RamRunConfig) -> Result<(Cost, Option<String>), DemoError> {
    let bytes = parse_bytes(input)?;
    log::debug!(
        "ram run: {} bytes in a {size}x{size} space",
        bytes.len(),
        size = cfg.size
    );
    let steps = min_steps(&bytes, cfg)?;
    let blocker = first_blocker(&bytes, cfg.size)?.map(|p| format!("{},{}", p.col, p.row));
    Ok((steps, blocker))
}
