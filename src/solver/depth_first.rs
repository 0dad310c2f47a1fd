use std::cmp::Reverse;

use crate::frontier::{Frontier, FrontierEntry};
use crate::grid_map::GridMap;
use crate::solver::{Candidate, ExpansionPolicy, SearchContext};

/// Depth-first search on a stack. Children are pushed so that the cheapest tile, ties broken
/// towards the higher heading code, is popped first. Only the ancestor chain is excluded, so a
/// cell may be reached again through another branch.
#[derive(Clone, Debug, Default)]
pub struct DepthFirstSolver;

impl ExpansionPolicy for DepthFirstSolver {
    /// Tile cost, then heading code descending.
    type Key = (u32, Reverse<u8>);

    fn root_key<G: GridMap>(&self, _: &SearchContext<'_, G>) -> Self::Key {
        (0, Reverse(0))
    }

    fn score<G: GridMap>(
        &self,
        ctx: &SearchContext<'_, G>,
        _: &FrontierEntry<Self::Key>,
        candidate: &Candidate,
    ) -> Self::Key {
        (ctx.grid.cost(candidate.position), Reverse(candidate.heading.code()))
    }

    fn take(&self, frontier: &mut Frontier<Self::Key>) -> Option<FrontierEntry<Self::Key>> {
        frontier.pop_back()
    }

    fn insert(&self, frontier: &mut Frontier<Self::Key>, mut children: Vec<FrontierEntry<Self::Key>>) {
        children.sort_by(|a, b| a.key.cmp(&b.key));
        for child in children.into_iter().rev() {
            frontier.push(child);
        }
    }
}
