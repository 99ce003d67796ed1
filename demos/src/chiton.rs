//! Chiton cave: cross a risk map from the top-left to the bottom-right
//! corner, paying the risk level of every cell entered.

use gridpath_core::{Grid, GridError, Point};
use gridpath_paths::{Cost, GridPather, PathFinder};

use crate::DemoError;

/// How many copies of the map the full cave spans in each direction.
pub const TILES: usize = 5;

pub fn parse(input: &str) -> Result<Grid<u8>, DemoError> {
    let map = Grid::parse_with(input.trim(), |c| match c.to_digit(10) {
        Some(d @ 1..=9) => Some(d as u8),
        _ => None,
    })?;
    log::debug!("chiton: {} risk map", map.bounds());
    Ok(map)
}

/// The map repeated `times` × `times`, each copy one risk level higher per
/// step right or down, wrapping from 9 back to 1.
pub fn tile(map: &Grid<u8>, times: usize) -> Result<Grid<u8>, DemoError> {
    let (rows, cols) = (map.rows(), map.cols());
    let mut cells = Vec::with_capacity(rows * cols * times * times);
    for r in 0..rows * times {
        for c in 0..cols * times {
            let p = Point::new((r % rows) as i32, (c % cols) as i32);
            let base = map.get(p).copied().ok_or(GridError::OutOfBounds {
                pos: p,
                bounds: map.bounds(),
            })?;
            let bump = (r / rows + c / cols) % 9;
            cells.push(((base as usize - 1 + bump) % 9 + 1) as u8);
        }
    }
    Ok(Grid::from_vec(rows * times, cols * times, cells)?)
}

/// Lowest total risk from corner to corner.
pub fn lowest_risk(map: &Grid<u8>) -> Result<Cost, DemoError> {
    let exit = map.bounds().last().ok_or(GridError::Empty)?;
    let pather = GridPather::new(map, |&risk| Some(Cost::from(risk))).toward(exit);
    let path = PathFinder::for_grid(map)
        .astar_path(&pather, Point::ZERO, |p| p == exit)?
        .ok_or(DemoError::NoPath {
            from: Point::ZERO,
            to: exit,
        })?;
    log::info!("chiton: risk {} over {} cells", path.cost(), path.len());
    Ok(path.cost())
}

/// Lowest risk across the map, then across the full tiled cave.
pub fn solve(input: &str) -> Result<(Cost, Cost), DemoError> {
    let map = parse(input)?;
    let full = tile(&map, TILES)?;
    Ok((lowest_risk(&map)?, lowest_risk(&full)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAVE: &str = "\
1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581
";

    #[test]
    fn example_cave() {
        assert_eq!(solve(CAVE).unwrap(), (40, 315));
    }

    #[test]
    fn tiles_wrap_past_nine() {
        let map = parse("8").unwrap();
        let full = tile(&map, TILES).unwrap();
        assert_eq!(full.bounds().to_string(), "5x5");
        assert_eq!(full.row(0), Some(&[8, 9, 1, 2, 3][..]));
        assert_eq!(full.get(Point::new(4, 4)), Some(&7));
    }

    #[test]
    fn entry_cell_is_free() {
        let map = parse("19\n11").unwrap();
        assert_eq!(lowest_risk(&map).unwrap(), 2);
        assert_eq!(lowest_risk(&parse("8").unwrap()).unwrap(), 0);
    }

    #[test]
    fn zero_risk_is_rejected() {
        assert!(matches!(parse("10\n11"), Err(DemoError::Grid(_))));
    }
}
