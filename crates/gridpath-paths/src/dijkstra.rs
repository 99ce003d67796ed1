use std::collections::{BTreeSet, HashMap, HashSet};

use gridpath_core::Point;

use crate::PathFinder;
use crate::error::SearchError;
use crate::finder::{DistanceMap, Frontier, Path};
use crate::traits::{Cost, SearchState, WeightedPather};

/// Every cheapest route from one start to the goal states, kept as a
/// predecessor graph in which all tying predecessors are retained.
#[derive(Debug, Clone)]
pub struct ShortestPaths<S> {
    start: S,
    cost: Cost,
    goals: Vec<S>,
    preds: HashMap<S, Vec<S>>,
}

impl<S: SearchState> ShortestPaths<S> {
    /// The optimal cost.
    #[inline]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Every goal state reached at the optimal cost, in the order popped.
    #[inline]
    pub fn goals(&self) -> &[S] {
        &self.goals
    }

    /// One optimal path, following the first predecessor recorded for each
    /// state (the one set when its distance last dropped).
    pub fn one_path(&self) -> Path<S> {
        let goal = self.goals.first().copied().unwrap_or(self.start);
        let mut states = vec![goal];
        let mut cur = goal;
        while cur != self.start {
            let Some(&p) = self.preds.get(&cur).and_then(|ps| ps.first()) else {
                break;
            };
            states.push(p);
            cur = p;
        }
        states.reverse();
        Path::new(states, self.cost)
    }

    /// Every state lying on at least one optimal path.
    pub fn states_on_any_path(&self) -> HashSet<S> {
        let mut seen: HashSet<S> = HashSet::new();
        let mut stack: Vec<S> = self.goals.clone();
        while let Some(s) = stack.pop() {
            if !seen.insert(s) {
                continue;
            }
            if let Some(ps) = self.preds.get(&s) {
                stack.extend(ps.iter().copied().filter(|p| !seen.contains(p)));
            }
        }
        seen
    }

    /// Distinct grid cells lying on at least one optimal path.
    pub fn cells_on_any_path(&self) -> BTreeSet<Point> {
        self.states_on_any_path().iter().map(|s| s.pos()).collect()
    }
}

impl PathFinder {
    /// Dijkstra that keeps every predecessor tying at the minimal cost.
    ///
    /// Expansion continues until the frontier's priority exceeds the best
    /// goal cost, so every goal state reachable at that cost is collected.
    /// Returns `Ok(None)` if no goal is reachable.
    pub fn shortest_paths<P: WeightedPather>(
        &self,
        pather: &P,
        start: P::State,
        is_goal: impl Fn(P::State) -> bool,
    ) -> Result<Option<ShortestPaths<P::State>>, SearchError> {
        self.check_start(&start)?;

        let mut dist: HashMap<P::State, Cost> = HashMap::new();
        let mut preds: HashMap<P::State, Vec<P::State>> = HashMap::new();
        let mut open = Frontier::new();
        let mut best: Option<Cost> = None;
        let mut goals = Vec::new();

        dist.insert(start, 0);
        open.push(0, 0, start);

        let mut nbuf = Vec::with_capacity(8);

        while let Some(current) = open.pop() {
            let cs = current.state;
            if dist.get(&cs).is_some_and(|&d| current.g > d) {
                continue;
            }
            if best.is_some_and(|b| current.g > b) {
                break;
            }
            if is_goal(cs) {
                best = Some(current.g);
                goals.push(cs);
                continue;
            }

            nbuf.clear();
            pather.neighbors(cs, &mut nbuf);

            for &ns in nbuf.iter() {
                if !self.in_bounds(&ns) || ns == start {
                    continue;
                }
                let tentative = current.g.saturating_add(pather.cost(cs, ns));
                match dist.get(&ns) {
                    Some(&known) if tentative > known => {}
                    Some(&known) if tentative == known => {
                        let ps = preds.entry(ns).or_default();
                        if !ps.contains(&cs) {
                            ps.push(cs);
                        }
                    }
                    _ => {
                        dist.insert(ns, tentative);
                        preds.insert(ns, vec![cs]);
                        open.push(tentative, tentative, ns);
                    }
                }
            }
        }

        let Some(cost) = best else {
            log::debug!("no path: {} states reached", dist.len());
            return Ok(None);
        };
        log::debug!(
            "all shortest paths: cost {cost}, {} goal states, {} states reached",
            goals.len(),
            dist.len()
        );
        Ok(Some(ShortestPaths {
            start,
            cost,
            goals,
            preds,
        }))
    }

    /// Compute a multi-source Dijkstra distance map.
    ///
    /// Every in-bounds source starts at cost 0. With `max_cost` set,
    /// states costing more are not recorded or expanded.
    pub fn dijkstra_map<P: WeightedPather>(
        &self,
        pather: &P,
        sources: &[P::State],
        max_cost: Option<Cost>,
    ) -> DistanceMap<P::State> {
        let mut dist: HashMap<P::State, Cost> = HashMap::new();
        let mut open = Frontier::new();

        // Seed sources.
        for &src in sources {
            if self.in_bounds(&src) && !dist.contains_key(&src) {
                dist.insert(src, 0);
                open.push(0, 0, src);
            }
        }

        let mut nbuf = Vec::with_capacity(8);

        while let Some(current) = open.pop() {
            let cs = current.state;
            if dist.get(&cs).is_some_and(|&d| current.g > d) {
                continue;
            }

            nbuf.clear();
            pather.neighbors(cs, &mut nbuf);

            for &ns in nbuf.iter() {
                if !self.in_bounds(&ns) {
                    continue;
                }
                let tentative = current.g.saturating_add(pather.cost(cs, ns));
                if max_cost.is_some_and(|m| tentative > m) {
                    continue;
                }
                if dist.get(&ns).is_some_and(|&known| tentative >= known) {
                    continue;
                }
                dist.insert(ns, tentative);
                open.push(tentative, tentative, ns);
            }
        }

        log::debug!("dijkstra map: {} states reached", dist.len());
        DistanceMap::from_table(dist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GridPather, Heading, TurnPather};
    use gridpath_core::{Direction, Grid};

    const OPEN_SQUARE: &str = "\
...
...
...";

    #[test]
    fn counts_cells_on_all_shortest_paths() {
        let g = Grid::parse(OPEN_SQUARE).unwrap();
        let pather = GridPather::new(&g, |_| Some(1));
        let pf = PathFinder::for_grid(&g);
        let goal = Point::new(2, 2);
        let sp = pf
            .shortest_paths(&pather, Point::ZERO, |s| s == goal)
            .unwrap()
            .unwrap();
        assert_eq!(sp.cost(), 4);
        assert_eq!(sp.goals(), &[goal]);
        // Every cell of an open square lies on some monotone path.
        assert_eq!(sp.cells_on_any_path().len(), 9);
        let one = sp.one_path();
        assert_eq!(one.len(), 5);
        assert_eq!(one.states().first(), Some(&Point::ZERO));
        assert_eq!(one.goal(), Some(goal));
    }

    #[test]
    fn single_corridor_has_one_route() {
        let g = Grid::parse(
            "\
...
##.
...",
        )
        .unwrap();
        let pather = GridPather::new(&g, |&c| (c == '.').then_some(1));
        let pf = PathFinder::for_grid(&g);
        let goal = Point::new(2, 0);
        let sp = pf
            .shortest_paths(&pather, Point::ZERO, |s| s == goal)
            .unwrap()
            .unwrap();
        assert_eq!(sp.cost(), 6);
        assert_eq!(sp.cells_on_any_path().len(), 7);
        assert_eq!(sp.one_path().positions().collect::<BTreeSet<_>>(), sp.cells_on_any_path());
    }

    #[test]
    fn collects_goal_states_tied_on_cost() {
        // Both (0,2) and (2,0) are two steps away.
        let g = Grid::parse(OPEN_SQUARE).unwrap();
        let pather = GridPather::new(&g, |_| Some(1));
        let pf = PathFinder::for_grid(&g);
        let sp = pf
            .shortest_paths(&pather, Point::ZERO, |s| {
                s == Point::new(0, 2) || s == Point::new(2, 0)
            })
            .unwrap()
            .unwrap();
        assert_eq!(sp.cost(), 2);
        let mut goals = sp.goals().to_vec();
        goals.sort();
        assert_eq!(goals, [Point::new(0, 2), Point::new(2, 0)]);
        assert_eq!(sp.cells_on_any_path().len(), 5);
    }

    #[test]
    fn turn_variant_collapses_directions() {
        let g = Grid::parse(
            "\
...
...",
        )
        .unwrap();
        let pather = TurnPather::new(&g, |&c| c == '.', 1, 10);
        let pf = PathFinder::for_grid(&g);
        let goal = Point::new(1, 2);
        let start = Heading::new(Point::ZERO, Direction::East);
        let sp = pf
            .shortest_paths(&pather, start, |s| s.pos == goal)
            .unwrap()
            .unwrap();
        // East twice, one turn south, one step: the only single-turn route.
        assert_eq!(sp.cost(), 3 + 10);
        let cells = sp.cells_on_any_path();
        assert_eq!(
            cells.into_iter().collect::<Vec<_>>(),
            [
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 2)
            ]
        );
        assert!(sp.states_on_any_path().len() > 4);
    }

    #[test]
    fn unreachable_is_none() {
        let g = Grid::parse(".#.").unwrap();
        let pather = GridPather::new(&g, |&c| (c == '.').then_some(1));
        let pf = PathFinder::for_grid(&g);
        let res = pf
            .shortest_paths(&pather, Point::ZERO, |s| s == Point::new(0, 2))
            .unwrap();
        assert!(res.is_none());
    }

    #[test]
    fn start_is_goal_has_zero_cost() {
        let g = Grid::parse(OPEN_SQUARE).unwrap();
        let pather = GridPather::new(&g, |_| Some(1));
        let pf = PathFinder::for_grid(&g);
        let sp = pf
            .shortest_paths(&pather, Point::ZERO, |s| s == Point::ZERO)
            .unwrap()
            .unwrap();
        assert_eq!(sp.cost(), 0);
        assert_eq!(sp.one_path().states(), &[Point::ZERO]);
        assert_eq!(sp.cells_on_any_path().len(), 1);
    }

    #[test]
    fn multi_source_map() {
        let g = Grid::parse_with("1111\n1911", |c| c.to_digit(10).map(u64::from)).unwrap();
        let pather = GridPather::new(&g, |&c| Some(c));
        let pf = PathFinder::for_grid(&g);
        let dm = pf.dijkstra_map(&pather, &[Point::new(0, 0), Point::new(0, 3)], None);
        assert_eq!(dm.len(), 8);
        assert_eq!(dm.get(&Point::new(0, 0)), Some(0));
        assert_eq!(dm.get(&Point::new(0, 1)), Some(1));
        assert_eq!(dm.get(&Point::new(1, 1)), Some(10));
        assert_eq!(dm.get(&Point::new(1, 2)), Some(2));
        assert_eq!(dm.get(&Point::new(1, 3)), Some(1));
    }

    #[test]
    fn map_respects_max_cost_and_bounds() {
        let g = Grid::parse_with("1111", |c| c.to_digit(10).map(u64::from)).unwrap();
        let pather = GridPather::new(&g, |&c| Some(c));
        let pf = PathFinder::for_grid(&g);
        let dm = pf.dijkstra_map(&pather, &[Point::ZERO, Point::new(5, 5)], Some(2));
        assert_eq!(dm.len(), 3);
        assert!(!dm.contains(&Point::new(0, 3)));
        assert!(!dm.contains(&Point::new(5, 5)));
    }

    #[test]
    fn map_by_position_with_headings() {
        let g = Grid::parse("...").unwrap();
        let pather = TurnPather::new(&g, |&c| c == '.', 1, 100);
        let pf = PathFinder::for_grid(&g);
        let dm = pf.dijkstra_map(&pather, &[Heading::new(Point::ZERO, Direction::East)], None);
        assert_eq!(dm.nearest_at(Point::new(0, 2)), Some(2));
        assert_eq!(
            dm.get(&Heading::new(Point::new(0, 2), Direction::North)),
            Some(102)
        );
    }
}
