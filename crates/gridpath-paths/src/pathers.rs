//! Ready-made pathers for four-way movement over a [`Grid`].

use gridpath_core::{Direction, Grid, Point};

use crate::distance::manhattan;
use crate::traits::{AstarPather, Cost, Pather, SearchState, WeightedPather};

// ---------------------------------------------------------------------------
// GridPather
// ---------------------------------------------------------------------------

/// Four-way movement where entering a cell costs what `cost_of` says.
///
/// `cost_of` returning `None` marks the cell as blocked. The starting cell's
/// own cost is never paid.
#[derive(Clone)]
pub struct GridPather<'g, T, F> {
    grid: &'g Grid<T>,
    cost_of: F,
    target: Option<Point>,
    min_step: Cost,
}

impl<'g, T, F> GridPather<'g, T, F>
where
    F: Fn(&T) -> Option<Cost>,
{
    pub fn new(grid: &'g Grid<T>, cost_of: F) -> Self {
        Self {
            grid,
            cost_of,
            target: None,
            min_step: 0,
        }
    }

    /// Aim the heuristic at `goal`: Manhattan distance times the cheapest
    /// passable cell, which never overestimates.
    pub fn toward(mut self, goal: Point) -> Self {
        self.min_step = self
            .grid
            .iter()
            .filter_map(|(_, c)| (self.cost_of)(c))
            .min()
            .unwrap_or(0);
        self.target = Some(goal);
        self
    }

    #[inline]
    fn step_cost(&self, p: Point) -> Option<Cost> {
        self.grid.get(p).and_then(|c| (self.cost_of)(c))
    }
}

impl<T, F> Pather for GridPather<'_, T, F>
where
    F: Fn(&T) -> Option<Cost>,
{
    type State = Point;

    fn neighbors(&self, s: Point, buf: &mut Vec<Point>) {
        buf.extend(
            s.neighbors_4()
                .into_iter()
                .filter(|&n| self.step_cost(n).is_some()),
        );
    }
}

impl<T, F> WeightedPather for GridPather<'_, T, F>
where
    F: Fn(&T) -> Option<Cost>,
{
    fn cost(&self, _from: Point, to: Point) -> Cost {
        self.step_cost(to).unwrap_or(Cost::MAX)
    }
}

impl<T, F> AstarPather for GridPather<'_, T, F>
where
    F: Fn(&T) -> Option<Cost>,
{
    fn estimate(&self, from: Point) -> Cost {
        self.target
            .map_or(0, |t| manhattan(from, t).saturating_mul(self.min_step))
    }
}

// ---------------------------------------------------------------------------
// TurnPather
// ---------------------------------------------------------------------------

/// A position plus the direction being faced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heading {
    pub pos: Point,
    pub dir: Direction,
}

impl Heading {
    #[inline]
    pub const fn new(pos: Point, dir: Direction) -> Self {
        Self { pos, dir }
    }
}

impl SearchState for Heading {
    #[inline]
    fn pos(&self) -> Point {
        self.pos
    }
}

/// Direction-sensitive movement: step forward for `move_cost`, or rotate 90°
/// in place for `turn_cost`.
#[derive(Clone)]
pub struct TurnPather<'g, T, F> {
    grid: &'g Grid<T>,
    passable: F,
    move_cost: Cost,
    turn_cost: Cost,
    target: Option<Point>,
}

impl<'g, T, F> TurnPather<'g, T, F>
where
    F: Fn(&T) -> bool,
{
    pub fn new(grid: &'g Grid<T>, passable: F, move_cost: Cost, turn_cost: Cost) -> Self {
        Self {
            grid,
            passable,
            move_cost,
            turn_cost,
            target: None,
        }
    }

    /// Aim the heuristic at `goal`, reached facing any direction.
    pub fn toward(mut self, goal: Point) -> Self {
        self.target = Some(goal);
        self
    }
}

/// Fewest 90° turns needed before `h` can have moved onto `goal`.
fn min_turns(h: Heading, goal: Point) -> Cost {
    let d = goal - h.pos;
    let mut needed = Vec::with_capacity(2);
    if d.row != 0 {
        needed.push(if d.row < 0 {
            Direction::North
        } else {
            Direction::South
        });
    }
    if d.col != 0 {
        needed.push(if d.col < 0 {
            Direction::West
        } else {
            Direction::East
        });
    }
    match needed.len() {
        0 => 0,
        n if needed.contains(&h.dir) => n as Cost - 1,
        2 => 2,
        _ if needed.contains(&h.dir.reverse()) => 2,
        _ => 1,
    }
}

impl<T, F> Pather for TurnPather<'_, T, F>
where
    F: Fn(&T) -> bool,
{
    type State = Heading;

    fn neighbors(&self, s: Heading, buf: &mut Vec<Heading>) {
        let ahead = s.pos.step(s.dir);
        if self.grid.get(ahead).is_some_and(|c| (self.passable)(c)) {
            buf.push(Heading::new(ahead, s.dir));
        }
        buf.push(Heading::new(s.pos, s.dir.turn_left()));
        buf.push(Heading::new(s.pos, s.dir.turn_right()));
    }
}

impl<T, F> WeightedPather for TurnPather<'_, T, F>
where
    F: Fn(&T) -> bool,
{
    fn cost(&self, from: Heading, to: Heading) -> Cost {
        if from.pos == to.pos {
            self.turn_cost
        } else {
            self.move_cost
        }
    }
}

impl<T, F> AstarPather for TurnPather<'_, T, F>
where
    F: Fn(&T) -> bool,
{
    fn estimate(&self, from: Heading) -> Cost {
        let Some(goal) = self.target else {
            return 0;
        };
        manhattan(from.pos, goal)
            .saturating_mul(self.move_cost)
            .saturating_add(min_turns(from, goal).saturating_mul(self.turn_cost))
    }
}

// ---------------------------------------------------------------------------
// SameValuePather
// ---------------------------------------------------------------------------

/// Four-way movement between neighbouring cells holding equal values.
///
/// Used to detect regions of identical cells.
#[derive(Clone, Copy)]
pub struct SameValuePather<'g, T> {
    grid: &'g Grid<T>,
}

impl<'g, T: PartialEq> SameValuePather<'g, T> {
    pub fn new(grid: &'g Grid<T>) -> Self {
        Self { grid }
    }
}

impl<T: PartialEq> Pather for SameValuePather<'_, T> {
    type State = Point;

    fn neighbors(&self, s: Point, buf: &mut Vec<Point>) {
        let Some(v) = self.grid.get(s) else {
            return;
        };
        buf.extend(
            s.neighbors_4()
                .into_iter()
                .filter(|&n| self.grid.get(n) == Some(v)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::PathFinder;
    use proptest::prelude::*;

    #[test]
    fn grid_pather_skips_blocked() {
        let g = Grid::parse(".#\n..").unwrap();
        let pather = GridPather::new(&g, |&c| (c == '.').then_some(1));
        let mut buf = Vec::new();
        pather.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf, [Point::new(1, 0)]);
        assert_eq!(pather.cost(Point::new(0, 0), Point::new(1, 0)), 1);
    }

    #[test]
    fn grid_pather_estimate_uses_cheapest_cell() {
        let g = Grid::from_rows(vec![vec![3u64, 2], vec![5, 4]]).unwrap();
        let pather = GridPather::new(&g, |&c| Some(c)).toward(Point::new(1, 1));
        assert_eq!(pather.estimate(Point::new(0, 0)), 4);
        assert_eq!(pather.estimate(Point::new(1, 1)), 0);
    }

    #[test]
    fn turn_pather_moves_and_rotates() {
        let g = Grid::parse("..\n..").unwrap();
        let pather = TurnPather::new(&g, |&c| c == '.', 1, 1000);
        let h = Heading::new(Point::new(0, 0), Direction::East);
        let mut buf = Vec::new();
        pather.neighbors(h, &mut buf);
        assert_eq!(
            buf,
            [
                Heading::new(Point::new(0, 1), Direction::East),
                Heading::new(Point::new(0, 0), Direction::North),
                Heading::new(Point::new(0, 0), Direction::South),
            ]
        );
        assert_eq!(pather.cost(h, buf[0]), 1);
        assert_eq!(pather.cost(h, buf[1]), 1000);
    }

    #[test]
    fn turn_pather_blocked_ahead_only_rotates() {
        let g = Grid::parse(".#").unwrap();
        let pather = TurnPather::new(&g, |&c| c == '.', 1, 1000);
        let mut buf = Vec::new();
        pather.neighbors(Heading::new(Point::new(0, 0), Direction::East), &mut buf);
        assert_eq!(buf.len(), 2);
        assert!(buf.iter().all(|h| h.pos == Point::new(0, 0)));
    }

    #[test]
    fn min_turns_lower_bounds() {
        let at = |dir| Heading::new(Point::new(2, 2), dir);
        // Straight ahead.
        assert_eq!(min_turns(at(Direction::East), Point::new(2, 5)), 0);
        // Directly behind.
        assert_eq!(min_turns(at(Direction::West), Point::new(2, 5)), 2);
        // Same row, facing sideways.
        assert_eq!(min_turns(at(Direction::North), Point::new(2, 5)), 1);
        // Off-axis, facing one of the needed directions.
        assert_eq!(min_turns(at(Direction::South), Point::new(4, 5)), 1);
        // Off-axis, facing away from both.
        assert_eq!(min_turns(at(Direction::North), Point::new(4, 5)), 2);
        assert_eq!(min_turns(at(Direction::North), Point::new(2, 2)), 0);
    }

    #[test]
    fn same_value_pather_stays_in_region() {
        let g = Grid::parse("AAB\nBAB").unwrap();
        let pather = SameValuePather::new(&g);
        let mut buf = Vec::new();
        pather.neighbors(Point::new(0, 1), &mut buf);
        assert_eq!(buf, [Point::new(1, 1), Point::new(0, 0)]);
    }

    fn open_grid() -> impl Strategy<Value = Grid<bool>> {
        (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
            proptest::collection::vec(prop_oneof![1 => Just(false), 3 => Just(true)], rows * cols)
                .prop_map(move |mut cells| {
                    cells[0] = true;
                    Grid::from_vec(rows, cols, cells).unwrap()
                })
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn turn_estimate_keeps_astar_optimal(
            grid in open_grid(),
            move_cost in 1u64..5,
            turn_cost in 0u64..20,
        ) {
            let goal = grid.bounds().last().unwrap();
            let start = Heading::new(Point::ZERO, Direction::East);
            let pf = PathFinder::for_grid(&grid);
            let pather = TurnPather::new(&grid, |&c| c, move_cost, turn_cost);

            let guided = pf
                .astar_path(&pather.clone().toward(goal), start, |h| h.pos == goal)
                .unwrap()
                .map(|p| p.cost());
            let plain = pf
                .dijkstra_path(&pather, start, |h| h.pos == goal)
                .unwrap()
                .map(|p| p.cost());
            let all = pf
                .shortest_paths(&pather, start, |h| h.pos == goal)
                .unwrap()
                .map(|sp| sp.cost());

            prop_assert_eq!(guided, plain);
            prop_assert_eq!(all, plain);
        }
    }
}
