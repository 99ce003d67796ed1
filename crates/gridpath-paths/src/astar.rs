use std::collections::HashMap;

use crate::PathFinder;
use crate::error::SearchError;
use crate::finder::{Frontier, Path, rebuild};
use crate::traits::{AstarPather, Cost, WeightedPather};

impl PathFinder {
    /// Compute a cheapest path from `start` to the first state satisfying
    /// `is_goal`, guided by the pather's heuristic.
    ///
    /// Returns `Ok(None)` if no goal is reachable. The result is optimal as
    /// long as [`AstarPather::estimate`] never overestimates.
    pub fn astar_path<P: AstarPather>(
        &self,
        pather: &P,
        start: P::State,
        is_goal: impl Fn(P::State) -> bool,
    ) -> Result<Option<Path<P::State>>, SearchError> {
        self.best_first(pather, start, is_goal, |s| pather.estimate(s))
    }

    /// Compute a cheapest path with plain Dijkstra (zero heuristic).
    pub fn dijkstra_path<P: WeightedPather>(
        &self,
        pather: &P,
        start: P::State,
        is_goal: impl Fn(P::State) -> bool,
    ) -> Result<Option<Path<P::State>>, SearchError> {
        self.best_first(pather, start, is_goal, |_| 0)
    }

    /// Shared Dijkstra/A* loop.
    ///
    /// Stale frontier entries (whose `g` is above the best known distance)
    /// are skipped on pop; a state whose distance drops after expansion is
    /// pushed and expanded again.
    pub(crate) fn best_first<P: WeightedPather>(
        &self,
        pather: &P,
        start: P::State,
        is_goal: impl Fn(P::State) -> bool,
        heuristic: impl Fn(P::State) -> Cost,
    ) -> Result<Option<Path<P::State>>, SearchError> {
        self.check_start(&start)?;

        let mut dist: HashMap<P::State, Cost> = HashMap::new();
        let mut parents: HashMap<P::State, P::State> = HashMap::new();
        let mut open = Frontier::new();

        dist.insert(start, 0);
        open.push(heuristic(start), 0, start);

        let mut nbuf = Vec::with_capacity(8);
        let mut expanded = 0usize;
        let mut stale = 0usize;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search None;
            };
            let cs = current.state;

            // Skip stale entries.
            if dist.get(&cs).is_some_and(|&best| current.g > best) {
                stale += 1;
                continue;
            }

            if is_goal(cs) {
                break 'search Some((cs, current.g));
            }

            expanded += 1;
            log::trace!("expand {cs:?} g={} f={}", current.g, current.f);

            nbuf.clear();
            pather.neighbors(cs, &mut nbuf);

            for &ns in nbuf.iter() {
                if !self.in_bounds(&ns) {
                    continue;
                }
                let tentative = current.g.saturating_add(pather.cost(cs, ns));
                if dist.get(&ns).is_some_and(|&known| tentative >= known) {
                    continue;
                }
                dist.insert(ns, tentative);
                parents.insert(ns, cs);
                open.push(tentative.saturating_add(heuristic(ns)), tentative, ns);
            }
        };

        match found {
            Some((goal, cost)) => {
                log::debug!(
                    "path found: cost {cost}, {expanded} expanded, {stale} stale entries skipped"
                );
                Ok(Some(Path::new(rebuild(&parents, goal), cost)))
            }
            None => {
                log::debug!("no path: {expanded} expanded, {stale} stale entries skipped");
                Ok(None)
            }
        }
    }
}
