use std::cmp::Reverse;

use grid_util::point::Point;

use crate::frontier::FrontierEntry;
use crate::grid_map::{manhattan, GridMap};
use crate::solver::{Candidate, ExpansionPolicy, SearchContext};

/// A* on the uniform-cost machinery. The first key component holds `g + h`; the true cost of
/// an entry is recovered by subtracting its own heuristic when it is expanded.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }

    /// Manhattan distance to the goal times the cheapest step on the map, times the heuristic
    /// factor. Admissible while the factor is at most 1.
    pub fn heuristic(&self, step_floor: u32, p: &Point, goal: &Point) -> u32 {
        ((manhattan(p, goal) * step_floor) as f32 * self.heuristic_factor) as u32
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::new()
    }
}

impl ExpansionPolicy for AstarSolver {
    type Key = (u32, usize, Reverse<u8>);

    fn suppresses_duplicates(&self) -> bool {
        true
    }

    fn root_key<G: GridMap>(&self, ctx: &SearchContext<'_, G>) -> Self::Key {
        (
            self.heuristic(ctx.step_floor, &ctx.start, &ctx.goal),
            0,
            Reverse(0),
        )
    }

    fn score<G: GridMap>(
        &self,
        ctx: &SearchContext<'_, G>,
        parent: &FrontierEntry<Self::Key>,
        candidate: &Candidate,
    ) -> Self::Key {
        let (estimate, _, _) = parent.key;
        let cost = estimate - self.heuristic(ctx.step_floor, &parent.position, &ctx.goal);
        (
            cost + ctx.grid.cost(candidate.position)
                + self.heuristic(ctx.step_floor, &candidate.position, &ctx.goal),
            ctx.tree.depth(parent.node),
            Reverse(candidate.heading.code()),
        )
    }
}
