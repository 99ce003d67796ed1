//! Race condition: a single track from `S` to `E`, where once per race a
//! program may pass through walls for a few picoseconds.

use gridpath_core::Point;
use gridpath_paths::{Cost, DistanceMap, GridPather, PathFinder, manhattan};

use crate::{DemoError, find_marker, parse_map};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaceConfig {
    /// Minimum saving for a cheat to count.
    pub threshold: Cost,
    /// Longest cheat for the first question.
    pub short_cheat: u32,
    /// Longest cheat for the second question.
    pub long_cheat: u32,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            threshold: 100,
            short_cheat: 2,
            long_cheat: 20,
        }
    }
}

/// Distances along the track measured from both ends.
pub struct Track {
    from_start: DistanceMap<Point>,
    to_end: DistanceMap<Point>,
    base: Cost,
    /// No cheat can usefully be longer than this.
    span: u32,
}

impl Track {
    pub fn parse(input: &str) -> Result<Self, DemoError> {
        let grid = parse_map(input)?;
        let start = find_marker(&grid, 'S')?;
        let end = find_marker(&grid, 'E')?;

        let pf = PathFinder::for_grid(&grid);
        let pather = GridPather::new(&grid, |&c| (c != '#').then_some(1));
        let from_start = pf.bfs_map(&pather, &[start], None);
        let to_end = pf.bfs_map(&pather, &[end], None);
        let base = from_start.get(&end).ok_or(DemoError::NoPath {
            from: start,
            to: end,
        })?;
        log::debug!("race: track of {} cells, {base} picoseconds", from_start.len());
        let span = u32::try_from(grid.rows() + grid.cols()).unwrap_or(u32::MAX);

        Ok(Self {
            from_start,
            to_end,
            base,
            span,
        })
    }

    /// Honest race time.
    pub fn base_time(&self) -> Cost {
        self.base
    }

    /// Number of distinct cheats of at most `max_len` steps that save at
    /// least `threshold` picoseconds.
    ///
    /// A cheat is identified by where it leaves and rejoins the track.
    /// Budgets longer than the map behave like the map's span.
    pub fn count_cheats(&self, max_len: u32, threshold: Cost) -> usize {
        let reach = i32::try_from(max_len.min(self.span)).unwrap_or(i32::MAX);
        let mut count = 0;
        for (a, da) in self.from_start.iter() {
            for dr in -reach..=reach {
                let span = reach - dr.abs();
                for dc in -span..=span {
                    let b = a.shift(dr, dc);
                    let Some(db) = self.to_end.get(&b) else {
                        continue;
                    };
                    let len = manhattan(a, b);
                    if len < 2 {
                        continue;
                    }
                    let time = da + len + db;
                    if time.saturating_add(threshold) <= self.base {
                        count += 1;
                    }
                }
            }
        }
        count
    }
}

/// Cheats worth taking with the short and the long cheat budget.
pub fn solve(input: &str, cfg: RaceConfig) -> Result<(usize, usize), DemoError> {
    let track = Track::parse(input)?;
    Ok((
        track.count_cheats(cfg.short_cheat, cfg.threshold),
        track.count_cheats(cfg.long_cheat, cfg.threshold),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK: &str = "\
###############
#...#...#.....#
#.#.#.#.#.###.#
#S#...#.#.#...#
#######.#.#.###
#######.#.#...#
#######.#.###.#
###..E#...#...#
###.#######.###
#...###...#...#
#.#####.#.###.#
#.#...#.#.#...#
#.#.#.#.#.#.###
#...#...#...###
###############
";

    #[test]
    fn honest_time() {
        assert_eq!(Track::parse(TRACK).unwrap().base_time(), 84);
    }

    #[test]
    fn short_cheats() {
        let track = Track::parse(TRACK).unwrap();
        let expected = [
            (2, 44),
            (4, 30),
            (6, 16),
            (8, 14),
            (10, 10),
            (12, 8),
            (20, 5),
            (36, 4),
            (38, 3),
            (40, 2),
            (64, 1),
            (100, 0),
        ];
        for (threshold, n) in expected {
            assert_eq!(track.count_cheats(2, threshold), n, "saving >= {threshold}");
        }
    }

    #[test]
    fn long_cheats() {
        let track = Track::parse(TRACK).unwrap();
        let expected = [
            (50, 285),
            (52, 253),
            (54, 222),
            (56, 193),
            (58, 154),
            (60, 129),
            (62, 106),
            (64, 86),
            (66, 67),
            (68, 55),
            (70, 41),
            (72, 29),
            (74, 7),
            (76, 3),
            (100, 0),
        ];
        for (threshold, n) in expected {
            assert_eq!(track.count_cheats(20, threshold), n, "saving >= {threshold}");
        }
    }

    #[test]
    fn huge_threshold_counts_nothing() {
        let track = Track::parse(TRACK).unwrap();
        assert_eq!(track.count_cheats(2, Cost::MAX), 0);
        assert_eq!(track.count_cheats(20, Cost::MAX - 1), 0);
        let straight = Track::parse("#####\n#S.E#\n#####").unwrap();
        assert_eq!(straight.count_cheats(2, Cost::MAX), 0);
    }

    #[test]
    fn oversized_budget_is_clamped() {
        let track = Track::parse(TRACK).unwrap();
        // A 15x15 map: no two cells are more than 28 steps apart.
        let whole_map = track.count_cheats(30, 50);
        assert!(whole_map >= 285);
        assert_eq!(track.count_cheats(u32::MAX, 50), whole_map);
        assert_eq!(track.count_cheats(i32::MAX as u32 + 1, 50), whole_map);
    }

    #[test]
    fn solve_uses_config() {
        let cfg = RaceConfig {
            threshold: 64,
            ..RaceConfig::default()
        };
        assert_eq!(solve(TRACK, cfg).unwrap(), (1, 86));
    }
}
