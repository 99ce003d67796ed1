//! Hiking trails on a topographic map: paths climb exactly one unit per
//! step from height 0 to height 9.

use std::collections::HashMap;

use gridpath_core::{Grid, Point};
use gridpath_paths::{PathFinder, Pather};

use crate::DemoError;

const TRAILHEAD: u8 = 0;
const SUMMIT: u8 = 9;

/// Moves one unit uphill.
#[derive(Clone, Copy)]
struct Uphill<'g> {
    map: &'g Grid<u8>,
}

impl Pather for Uphill<'_> {
    type State = Point;

    fn neighbors(&self, s: Point, buf: &mut Vec<Point>) {
        let Some(&h) = self.map.get(s) else {
            return;
        };
        buf.extend(
            s.neighbors_4()
                .into_iter()
                .filter(|&n| self.map.get(n).is_some_and(|&nh| nh == h + 1)),
        );
    }
}

/// Number of distinct trails from `p` to any summit.
///
/// `cache` holds counts already known for this map.
fn count_trails(pather: &Uphill, p: Point, cache: &mut HashMap<Point, u64>) -> u64 {
    if let Some(&n) = cache.get(&p) {
        return n;
    }
    let n = if pather.map.get(p) == Some(&SUMMIT) {
        1
    } else {
        let mut next = Vec::with_capacity(4);
        pather.neighbors(p, &mut next);
        next.into_iter()
            .map(|q| count_trails(pather, q, cache))
            .sum()
    };
    cache.insert(p, n);
    n
}

pub fn parse(input: &str) -> Result<Grid<u8>, DemoError> {
    let map = Grid::parse_with(input.trim(), |c| c.to_digit(10).map(|d| d as u8))?;
    log::debug!("trails: {} map", map.bounds());
    Ok(map)
}

/// Sum of trailhead scores (distinct summits reachable) and ratings
/// (distinct trails).
pub fn solve(input: &str) -> Result<(usize, u64), DemoError> {
    let map = parse(input)?;
    let pather = Uphill { map: &map };
    let pf = PathFinder::for_grid(&map);
    let heads = map.positions(|&h| h == TRAILHEAD);

    let mut score = 0;
    for &head in &heads {
        let reached = pf.flood_fill(&pather, head)?;
        score += reached
            .iter()
            .filter(|&&p| map.get(p) == Some(&SUMMIT))
            .count();
    }

    let mut cache = HashMap::new();
    let rating = heads
        .iter()
        .map(|&head| count_trails(&pather, head, &mut cache))
        .sum();

    log::info!("trails: {} trailheads", heads.len());
    Ok((score, rating))
}
