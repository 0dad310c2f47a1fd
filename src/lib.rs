//! # terrain_pathfinding
//!
//! Routes an agent across a rectangular grid whose cells carry traversal costs. Four
//! interchangeable search strategies share one spanning-tree arena and one frontier:
//!
//! - depth-first search on a stack ([DepthFirstSolver](solver::depth_first::DepthFirstSolver)),
//! - best-first search on the mean cost of a candidate's neighbours
//!   ([AverageNeighborSolver](solver::average_neighbor::AverageNeighborSolver)),
//! - [uniform-cost search](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
//!   ([UniformCostSolver](solver::uniform_cost::UniformCostSolver)),
//! - [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with a Manhattan heuristic
//!   scaled by the cheapest step on the map ([AstarSolver](solver::astar::AstarSolver)).
//!
//! A cost-blind [BaselineSolver](solver::baseline::BaselineSolver) that walks straight at the
//! goal is included for comparison. Only uniform-cost search and A* (with a heuristic factor
//! of at most 1) return minimum-cost routes. [TileMap] pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! so that searches towards an unreachable goal fail immediately.
pub mod agent;
pub mod error;
pub mod frontier;
pub mod grid_map;
pub mod search_tree;
pub mod solver;
pub mod tile_map;

pub use agent::{Agent, Strategy};
pub use error::{MapError, PathError, PathResult};
pub use grid_map::{manhattan, path_cost, Cell, GridMap, Tile, IMPASSABLE_COST};
pub use solver::{ExpansionPolicy, Search};
pub use tile_map::{Terrain, TileMap};

use grid_util::point::Point;
use itertools::Itertools;

/// Checks that consecutive cells of `path` are cardinal neighbours.
pub fn is_connected(path: &[Cell]) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| manhattan(&a.position, &b.position) == 1)
}

/// Positions of `path`, in order.
pub fn waypoints(path: &[Cell]) -> Vec<Point> {
    path.iter().map(|c| c.position).collect()
}
