use grid_util::point::Point;

use crate::error::{PathError, PathResult};
use crate::grid_map::{Cell, GridMap};
use crate::solver::check_endpoints;

/// Walks straight towards the goal, closing the row distance before the column distance.
/// Terrain costs are ignored entirely, walls included, so this is only a reference for the
/// search strategies. Fails with [PathError::NoPathFound] if the walk leaves a ragged map.
#[derive(Clone, Debug, Default)]
pub struct BaselineSolver;

impl BaselineSolver {
    pub fn get_waypoints<G: GridMap>(&self, grid: &G, start: Point, goal: Point) -> PathResult<Vec<Point>> {
        check_endpoints(grid, start, goal)?;
        let mut current = start;
        let mut path = vec![current];
        while current != goal {
            current = if current.y != goal.y {
                Point::new(current.x, current.y + (goal.y - current.y).signum())
            } else {
                Point::new(current.x + (goal.x - current.x).signum(), current.y)
            };
            if !grid.in_bounds(current) {
                return Err(PathError::NoPathFound { start, goal });
            }
            path.push(current);
        }
        Ok(path)
    }

    pub fn get_path<G: GridMap>(&self, grid: &G, start: Point, goal: Point) -> PathResult<Vec<Cell>> {
        self.get_waypoints(grid, start, goal)
            .map(|waypoints| waypoints.into_iter().map(|p| grid.cell(p)).collect())
    }
}
