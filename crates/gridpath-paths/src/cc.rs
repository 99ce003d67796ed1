//! Flood fill and connected-component labelling.

use std::collections::HashSet;

use gridpath_core::{Bounds, Point};

use crate::PathFinder;
use crate::error::SearchError;
use crate::traits::Pather;

/// Component labels for every cell of a rectangle.
///
/// Labels are assigned in row-major order of each component's first cell,
/// starting at 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    bounds: Bounds,
    labels: Vec<usize>,
    count: usize,
}

impl Components {
    /// Label of the component containing `p`, or `None` outside the bounds.
    pub fn label_at(&self, p: Point) -> Option<usize> {
        self.bounds.index(p).map(|i| self.labels[i])
    }

    /// Number of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Cells of each component, indexed by label, each in row-major order.
    pub fn regions(&self) -> Vec<Vec<Point>> {
        let mut out = vec![Vec::new(); self.count];
        for (i, &l) in self.labels.iter().enumerate() {
            out[l].push(self.bounds.point(i));
        }
        out
    }
}

impl PathFinder {
    /// Collect every state reachable from `start` through `pather`, in
    /// discovery order. `start` comes first.
    pub fn flood_fill<P: Pather>(
        &self,
        pather: &P,
        start: P::State,
    ) -> Result<Vec<P::State>, SearchError> {
        self.check_start(&start)?;

        let mut seen: HashSet<P::State> = HashSet::new();
        seen.insert(start);
        let mut result = vec![start];
        let mut stack = vec![start];
        let mut nbuf = Vec::with_capacity(8);

        while let Some(cs) = stack.pop() {
            nbuf.clear();
            pather.neighbors(cs, &mut nbuf);

            for &ns in nbuf.iter() {
                if self.in_bounds(&ns) && seen.insert(ns) {
                    stack.push(ns);
                    result.push(ns);
                }
            }
        }

        Ok(result)
    }

    /// Label every cell of the bounds with a connected-component id.
    ///
    /// Two cells share a label if `pather` links them, directly or
    /// through other cells. A cell with no neighbours is its own component.
    pub fn components<P: Pather<State = Point>>(&self, pather: &P) -> Components {
        let bounds = self.bounds();
        let mut labels: Vec<Option<usize>> = vec![None; bounds.len()];
        let mut label = 0;
        let mut stack = Vec::new();
        let mut nbuf = Vec::with_capacity(8);

        for start in 0..bounds.len() {
            if labels[start].is_some() {
                continue;
            }

            stack.clear();
            stack.push(start);
            labels[start] = Some(label);

            while let Some(ci) = stack.pop() {
                nbuf.clear();
                pather.neighbors(bounds.point(ci), &mut nbuf);

                for &np in nbuf.iter() {
                    if let Some(ni) = bounds.index(np) {
                        if labels[ni].is_none() {
                            labels[ni] = Some(label);
                            stack.push(ni);
                        }
                    }
                }
            }

            label += 1;
        }

        log::debug!("labelled {label} components in {bounds}");
        Components {
            bounds,
            labels: labels.into_iter().map(|l| l.unwrap_or(0)).collect(),
            count: label,
        }
    }
}
