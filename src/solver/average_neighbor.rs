use std::cmp::Ordering;

use grid_util::point::Point;

use crate::frontier::FrontierEntry;
use crate::grid_map::GridMap;
use crate::solver::{Candidate, ExpansionPolicy, Heading, SearchContext};

/// Mean cost of a candidate's neighbours, then heading code descending.
#[derive(Clone, Copy, Debug)]
pub struct AverageKey {
    pub average: f64,
    pub code: u8,
}

impl PartialEq for AverageKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AverageKey {}

impl PartialOrd for AverageKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AverageKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.average
            .total_cmp(&other.average)
            .then_with(|| other.code.cmp(&self.code))
    }
}

/// Best-first search with a one step lookahead: a candidate is scored by the mean traversal
/// cost of its own neighbours, leaving out the cell it was reached from. The queue is kept
/// sorted on that score and pending duplicates are dropped when a position is expanded.
#[derive(Clone, Debug)]
pub struct AverageNeighborSolver {
    /// Stop as soon as the goal is generated as a neighbour. Setting this to `false` waits
    /// until the goal is taken off the queue like the other strategies.
    pub goal_on_generation: bool,
}

impl AverageNeighborSolver {
    pub fn new() -> AverageNeighborSolver {
        AverageNeighborSolver {
            goal_on_generation: true,
        }
    }

    /// Mean cost of the in-bounds neighbours of `position` other than `from`. A cell whose
    /// only neighbour is `from` scores as infinitely expensive.
    pub fn lookahead<G: GridMap>(grid: &G, position: &Point, from: &Point) -> f64 {
        let (sum, count) = Heading::ALL
            .iter()
            .map(|h| h.step(position))
            .filter(|p| grid.in_bounds(*p) && p != from)
            .fold((0u64, 0u64), |(sum, count), p| {
                (sum + grid.cost(p) as u64, count + 1)
            });
        if count == 0 {
            f64::INFINITY
        } else {
            sum as f64 / count as f64
        }
    }
}

impl Default for AverageNeighborSolver {
    fn default() -> Self {
        AverageNeighborSolver::new()
    }
}

impl ExpansionPolicy for AverageNeighborSolver {
    type Key = AverageKey;

    fn suppresses_duplicates(&self) -> bool {
        true
    }

    fn goal_on_generation(&self) -> bool {
        self.goal_on_generation
    }

    fn root_key<G: GridMap>(&self, _: &SearchContext<'_, G>) -> Self::Key {
        AverageKey {
            average: 0.0,
            code: 0,
        }
    }

    fn score<G: GridMap>(
        &self,
        ctx: &SearchContext<'_, G>,
        parent: &FrontierEntry<Self::Key>,
        candidate: &Candidate,
    ) -> Self::Key {
        AverageKey {
            average: AverageNeighborSolver::lookahead(
                ctx.grid,
                &candidate.position,
                &parent.position,
            ),
            code: candidate.heading.code(),
        }
    }
}
