use core::fmt;
use std::str::FromStr;

use grid_util::point::Point;
use log::info;

use crate::error::{PathError, PathResult};
use crate::grid_map::{Cell, GridMap};
use crate::solver::astar::AstarSolver;
use crate::solver::average_neighbor::AverageNeighborSolver;
use crate::solver::baseline::BaselineSolver;
use crate::solver::depth_first::DepthFirstSolver;
use crate::solver::uniform_cost::UniformCostSolver;
use crate::solver::ExpansionPolicy;

/// The routing strategy an [Agent] uses.
#[derive(Clone, Debug)]
pub enum Strategy {
    DepthFirst(DepthFirstSolver),
    AverageNeighbor(AverageNeighborSolver),
    UniformCost(UniformCostSolver),
    HeuristicGuided(AstarSolver),
    Baseline(BaselineSolver),
}

impl Strategy {
    /// Every strategy with its default settings.
    pub fn all() -> [Strategy; 5] {
        [
            Strategy::DepthFirst(DepthFirstSolver),
            Strategy::AverageNeighbor(AverageNeighborSolver::new()),
            Strategy::UniformCost(UniformCostSolver),
            Strategy::HeuristicGuided(AstarSolver::new()),
            Strategy::Baseline(BaselineSolver),
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::DepthFirst(_) => "depth-first",
            Strategy::AverageNeighbor(_) => "average-neighbor",
            Strategy::UniformCost(_) => "uniform-cost",
            Strategy::HeuristicGuided(_) => "heuristic-guided",
            Strategy::Baseline(_) => "baseline",
        }
    }

    /// Whether the strategy always returns a minimum-cost route.
    pub fn is_optimal(&self) -> bool {
        match self {
            Strategy::UniformCost(_) => true,
            Strategy::HeuristicGuided(solver) => solver.heuristic_factor <= 1.0,
            _ => false,
        }
    }

    pub fn get_waypoints<G: GridMap>(&self, grid: &G, start: Point, goal: Point) -> PathResult<Vec<Point>> {
        match self {
            Strategy::DepthFirst(solver) => solver.get_waypoints(grid, start, goal),
            Strategy::AverageNeighbor(solver) => solver.get_waypoints(grid, start, goal),
            Strategy::UniformCost(solver) => solver.get_waypoints(grid, start, goal),
            Strategy::HeuristicGuided(solver) => solver.get_waypoints(grid, start, goal),
            Strategy::Baseline(solver) => solver.get_waypoints(grid, start, goal),
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::HeuristicGuided(AstarSolver::new())
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Accepts the strategy names and the names of the agents that traditionally use them.
impl FromStr for Strategy {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "depth-first" | "dfs" | "aki" => Ok(Strategy::DepthFirst(DepthFirstSolver)),
            "average-neighbor" | "jocke" => {
                Ok(Strategy::AverageNeighbor(AverageNeighborSolver::new()))
            }
            "uniform-cost" | "dijkstra" | "draza" => Ok(Strategy::UniformCost(UniformCostSolver)),
            "heuristic-guided" | "astar" | "a*" | "bole" => {
                Ok(Strategy::HeuristicGuided(AstarSolver::new()))
            }
            "baseline" | "example" => Ok(Strategy::Baseline(BaselineSolver)),
            _ => Err(PathError::UnknownStrategy(s.to_owned())),
        }
    }
}

/// An agent standing on the map. `offset` is the drawing displacement, in pixels, accumulated
/// by [move_towards](Self::move_towards) since the agent was last placed.
#[derive(Clone, Debug)]
pub struct Agent {
    pub position: Point,
    pub offset: Point,
    pub strategy: Strategy,
}

impl Agent {
    pub fn new(position: Point, strategy: Strategy) -> Agent {
        Agent {
            position,
            offset: Point::new(0, 0),
            strategy,
        }
    }

    /// The route from the agent's position to `goal`, both inclusive.
    pub fn get_agent_path<G: GridMap>(&self, grid: &G, goal: Point) -> PathResult<Vec<Cell>> {
        info!(
            "Agent at {} routing to {} using {}",
            self.position, goal, self.strategy
        );
        let waypoints = self.strategy.get_waypoints(grid, self.position, goal)?;
        Ok(waypoints.into_iter().map(|p| grid.cell(p)).collect())
    }

    /// One animation tick towards the cell `target`: the drawing offset moves one pixel per
    /// cell of difference along each axis.
    pub fn move_towards(&mut self, target: Point) {
        self.offset = Point::new(
            self.offset.x + target.x - self.position.x,
            self.offset.y + target.y - self.position.y,
        );
    }

    /// Moves the agent onto `position` at once, discarding any animation offset.
    pub fn place_to(&mut self, position: Point) {
        self.position = position;
        self.offset = Point::new(0, 0);
    }

    /// Top-left pixel of the agent for tiles of `tile_size` pixels.
    pub fn screen_position(&self, tile_size: i32) -> Point {
        Point::new(
            self.position.x * tile_size + self.offset.x,
            self.position.y * tile_size + self.offset.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile_map::TileMap;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("aki".parse::<Strategy>().unwrap().name(), "depth-first");
        assert_eq!("Jocke".parse::<Strategy>().unwrap().name(), "average-neighbor");
        assert_eq!("dijkstra".parse::<Strategy>().unwrap().name(), "uniform-cost");
        assert_eq!(" bole ".parse::<Strategy>().unwrap().name(), "heuristic-guided");
        assert_eq!("example".parse::<Strategy>().unwrap().name(), "baseline");
        assert_eq!(
            "teleport".parse::<Strategy>().unwrap_err(),
            PathError::UnknownStrategy("teleport".to_owned())
        );
        for strategy in Strategy::all() {
            assert_eq!(strategy.name().parse::<Strategy>().unwrap().name(), strategy.name());
        }
    }

    #[test]
    fn optimality_flags() {
        let optimal = Strategy::all()
            .iter()
            .filter(|s| s.is_optimal())
            .map(|s| s.name())
            .collect::<Vec<_>>();
        assert_eq!(optimal, vec!["uniform-cost", "heuristic-guided"]);
        let greedy = Strategy::HeuristicGuided(AstarSolver {
            heuristic_factor: 1.5,
        });
        assert!(!greedy.is_optimal());
    }

    #[test]
    fn path_starts_at_agent() {
        let map: TileMap = "rrr\nrrr".parse().unwrap();
        let agent = Agent::new(Point::new(2, 1), Strategy::default());
        let path = agent.get_agent_path(&map, Point::new(0, 0)).unwrap();
        assert_eq!(path.first().unwrap().position, Point::new(2, 1));
        assert_eq!(path.last().unwrap().position, Point::new(0, 0));
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn invalid_start_is_reported() {
        let map: TileMap = "rr".parse().unwrap();
        let agent = Agent::new(Point::new(5, 0), Strategy::default());
        assert_eq!(
            agent.get_agent_path(&map, Point::new(0, 0)),
            Err(PathError::InvalidStart(Point::new(5, 0)))
        );
    }

    #[test]
    fn movement_and_placement() {
        let mut agent = Agent::new(Point::new(1, 1), Strategy::default());
        assert_eq!(agent.screen_position(32), Point::new(32, 32));
        for _ in 0..4 {
            agent.move_towards(Point::new(2, 1));
        }
        assert_eq!(agent.screen_position(32), Point::new(36, 32));
        assert_eq!(agent.position, Point::new(1, 1));
        agent.place_to(Point::new(2, 1));
        assert_eq!(agent.offset, Point::new(0, 0));
        assert_eq!(agent.screen_position(32), Point::new(64, 32));
    }
}
