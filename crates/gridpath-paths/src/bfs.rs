use std::collections::{HashMap, VecDeque};

use crate::PathFinder;
use crate::finder::DistanceMap;
use crate::traits::{Cost, Pather};

impl PathFinder {
    /// Compute a multi-source breadth-first search distance map.
    ///
    /// Each step has cost 1. With `max_dist` set, expansion stops beyond
    /// that many steps. Out-of-bounds sources are ignored.
    pub fn bfs_map<P: Pather>(
        &self,
        pather: &P,
        sources: &[P::State],
        max_dist: Option<Cost>,
    ) -> DistanceMap<P::State> {
        let mut dist: HashMap<P::State, Cost> = HashMap::new();
        let mut queue: VecDeque<P::State> = VecDeque::new();

        for &src in sources {
            if !self.in_bounds(&src) || dist.contains_key(&src) {
                continue;
            }
            dist.insert(src, 0);
            queue.push_back(src);
        }

        let mut nbuf = Vec::with_capacity(8);

        while let Some(cs) = queue.pop_front() {
            let nd = dist[&cs] + 1;
            if max_dist.is_some_and(|m| nd > m) {
                continue;
            }

            nbuf.clear();
            pather.neighbors(cs, &mut nbuf);

            for &ns in nbuf.iter() {
                if !self.in_bounds(&ns) || dist.contains_key(&ns) {
                    continue;
                }
                dist.insert(ns, nd);
                queue.push_back(ns);
            }
        }

        log::debug!("bfs map: {} states reached", dist.len());
        DistanceMap::from_table(dist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridPather;
    use gridpath_core::{Grid, Point};

    const MAZE: &str = "\
..#..
.##.#
.....";

    #[test]
    fn distances_around_walls() {
        let g = Grid::parse(MAZE).unwrap();
        let pather = GridPather::new(&g, |&c| (c == '.').then_some(1));
        let pf = PathFinder::for_grid(&g);
        let dm = pf.bfs_map(&pather, &[Point::ZERO], None);
        assert_eq!(dm.get(&Point::new(0, 1)), Some(1));
        assert_eq!(dm.get(&Point::new(2, 4)), Some(6));
        assert_eq!(dm.get(&Point::new(0, 3)), Some(7));
        assert_eq!(dm.get(&Point::new(0, 2)), None);
        assert_eq!(dm.len(), 11);
    }

    #[test]
    fn max_dist_cuts_off() {
        let g = Grid::parse(MAZE).unwrap();
        let pather = GridPather::new(&g, |&c| (c == '.').then_some(1));
        let pf = PathFinder::for_grid(&g);
        let dm = pf.bfs_map(&pather, &[Point::ZERO], Some(2));
        assert_eq!(dm.len(), 4);
        assert!(dm.iter().all(|(_, d)| d <= 2));
    }

    #[test]
    fn agrees_with_unit_dijkstra() {
        let g = Grid::parse(MAZE).unwrap();
        let pather = GridPather::new(&g, |&c| (c == '.').then_some(1));
        let pf = PathFinder::for_grid(&g);
        let sources = [Point::ZERO, Point::new(0, 4)];
        let bfs = pf.bfs_map(&pather, &sources, None);
        let dij = pf.dijkstra_map(&pather, &sources, None);
        assert_eq!(bfs.len(), dij.len());
        for (s, d) in bfs.iter() {
            assert_eq!(dij.get(&s), Some(d), "mismatch at {s}");
        }
    }

    #[test]
    fn duplicate_and_outside_sources() {
        let g = Grid::parse(MAZE).unwrap();
        let pather = GridPather::new(&g, |&c| (c == '.').then_some(1));
        let pf = PathFinder::for_grid(&g);
        let dm = pf.bfs_map(&pather, &[Point::ZERO, Point::ZERO, Point::new(9, 9)], Some(0));
        assert_eq!(dm.len(), 1);
    }
}
