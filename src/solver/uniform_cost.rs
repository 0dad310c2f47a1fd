use std::cmp::Reverse;

use crate::frontier::FrontierEntry;
use crate::grid_map::GridMap;
use crate::solver::{Candidate, ExpansionPolicy, SearchContext};

/// Uniform-cost (Dijkstra) search. Entries are ordered on accumulated cost, then on the depth
/// of the node they were generated from, then on heading code descending.
#[derive(Clone, Debug, Default)]
pub struct UniformCostSolver;

impl ExpansionPolicy for UniformCostSolver {
    type Key = (u32, usize, Reverse<u8>);

    fn suppresses_duplicates(&self) -> bool {
        true
    }

    fn root_key<G: GridMap>(&self, _: &SearchContext<'_, G>) -> Self::Key {
        (0, 0, Reverse(0))
    }

    fn score<G: GridMap>(
        &self,
        ctx: &SearchContext<'_, G>,
        parent: &FrontierEntry<Self::Key>,
        candidate: &Candidate,
    ) -> Self::Key {
        let (cost, _, _) = parent.key;
        (
            cost + ctx.grid.cost(candidate.position),
            ctx.tree.depth(parent.node),
            Reverse(candidate.heading.code()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid_map::path_cost;
    use crate::error::PathError;
    use crate::tile_map::{Terrain, TileMap};
    use grid_util::point::Point;

    #[test]
    fn uniform_road_costs_four_steps() {
        let map: TileMap = "rrr\nrrr\nrrr".parse().unwrap();
        let path = UniformCostSolver
            .get_path(&map, Point::new(0, 0), Point::new(2, 2))
            .unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path_cost(&path), 8);
    }

    #[test]
    fn takes_the_cheaper_detour() {
        // r d r
        // r r r
        // Going through the dune costs 7 + 2, around it 2 + 2 + 2 + 2.
        let map: TileMap = "rdr\nrrr".parse().unwrap();
        let path = UniformCostSolver
            .get_path(&map, Point::new(0, 0), Point::new(2, 0))
            .unwrap();
        assert_eq!(path_cost(&path), 8);
        assert_eq!(path.len(), 5);
        assert!(path.iter().all(|c| c.kind == 'r'));
    }

    #[test]
    fn pays_for_mud_when_the_detour_is_longer() {
        // r m r
        // r r r
        // Through the mud 5 + 2 beats four road steps.
        let map: TileMap = "rmr\nrrr".parse().unwrap();
        let path = UniformCostSolver
            .get_path(&map, Point::new(0, 0), Point::new(2, 0))
            .unwrap();
        assert_eq!(path_cost(&path), 7);
        assert_eq!(path[1].kind, 'm');
    }

    #[test]
    fn ties_break_towards_north_then_east() {
        // With equal costs and depths an east step (code 3) beats a south step (code 2): the
        // start expands (1,0) first, and the goal is then entered from (0,1) by an east step.
        let map: TileMap = "rr\nrr".parse().unwrap();
        let search = UniformCostSolver
            .search(&map, Point::new(0, 0), Point::new(1, 1))
            .unwrap();
        assert_eq!(search.expanded[1], Point::new(1, 0));
        assert_eq!(
            search.waypoints,
            vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)]
        );
    }

    #[test]
    fn ragged_rows_do_not_panic() {
        // The second row is one cell short, so (1,1) is off the map.
        let map = vec![vec![Terrain::Road, Terrain::Road], vec![Terrain::Road]];
        let path = UniformCostSolver
            .get_waypoints(&map, Point::new(0, 0), Point::new(0, 1))
            .unwrap();
        assert_eq!(path, vec![Point::new(0, 0), Point::new(0, 1)]);
        assert_eq!(
            UniformCostSolver.get_waypoints(&map, Point::new(0, 0), Point::new(1, 1)),
            Err(PathError::InvalidGoal(Point::new(1, 1)))
        );
    }

    #[test]
    fn never_expands_a_position_twice() {
        let map: TileMap = "rgmr\nrsrr\nrrwr\ngrrd".parse().unwrap();
        let search = UniformCostSolver
            .search(&map, Point::new(0, 0), Point::new(3, 3))
            .unwrap();
        let mut seen = search.expanded.clone();
        seen.sort_by_key(|p| (p.y, p.x));
        seen.dedup();
        assert_eq!(seen.len(), search.expanded.len());
    }
}
