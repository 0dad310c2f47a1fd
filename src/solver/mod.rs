//! The search core. Every strategy implements [ExpansionPolicy] by supplying a key for
//! each generated candidate, a frontier discipline and a termination rule; the tree
//! bookkeeping, neighbour generation and path reconstruction live here once.
use crate::error::{PathError, PathResult};
use crate::frontier::{Frontier, FrontierEntry};
use crate::grid_map::{Cell, GridMap};
use crate::search_tree::SearchTree;
use core::fmt;
use fxhash::FxHashSet;
use grid_util::point::Point;
use log::{debug, info, warn};
use smallvec::SmallVec;

pub mod astar;
pub mod average_neighbor;
pub mod baseline;
pub mod depth_first;
pub mod uniform_cost;

/// Cardinal step direction. The code only breaks ties: higher codes are preferred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Generation order of neighbours.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    pub fn code(&self) -> u8 {
        match self {
            Heading::North => 4,
            Heading::East => 3,
            Heading::South => 2,
            Heading::West => 1,
        }
    }

    pub fn step(&self, from: &Point) -> Point {
        match self {
            Heading::North => Point::new(from.x, from.y - 1),
            Heading::East => Point::new(from.x + 1, from.y),
            Heading::South => Point::new(from.x, from.y + 1),
            Heading::West => Point::new(from.x - 1, from.y),
        }
    }
}

/// A neighbour that passed validation and is about to be scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub position: Point,
    pub heading: Heading,
}

/// Everything a policy may look at while scoring.
pub struct SearchContext<'a, G> {
    pub grid: &'a G,
    pub tree: &'a SearchTree,
    pub start: Point,
    pub goal: Point,
    /// Cheapest passable step on the map.
    pub step_floor: u32,
}

/// Outcome of one search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Search {
    /// Positions from start to goal inclusive.
    pub waypoints: Vec<Point>,
    /// Positions in the order they were taken off the frontier.
    pub expanded: Vec<Point>,
    pub tree_size: usize,
}

/// Valid neighbours of tree node `node`: in bounds, passable, not on the node's own path to
/// the root and, when `closed` is given, not yet expanded.
pub fn candidates<G: GridMap>(
    grid: &G,
    tree: &SearchTree,
    node: usize,
    closed: Option<&FxHashSet<Point>>,
) -> SmallVec<[Candidate; 4]> {
    let Some(current) = tree.get(node) else {
        return SmallVec::new();
    };
    Heading::ALL
        .iter()
        .map(|&heading| Candidate {
            position: heading.step(&current.position),
            heading,
        })
        .filter(|c| grid.in_bounds(c.position) && grid.passable(c.position))
        .filter(|c| closed.map_or(true, |closed| !closed.contains(&c.position)))
        .filter(|c| !tree.on_path_to_root(node, c.position))
        .collect()
}

pub(crate) fn check_endpoints<G: GridMap>(grid: &G, start: Point, goal: Point) -> PathResult<()> {
    if !grid.in_bounds(start) {
        return Err(PathError::InvalidStart(start));
    }
    if !grid.in_bounds(goal) {
        return Err(PathError::InvalidGoal(goal));
    }
    Ok(())
}

pub trait ExpansionPolicy {
    type Key: Ord + Clone + fmt::Debug;

    /// Policies that return `true` keep a set of expanded positions, never generate those
    /// again and drop pending entries at the position being expanded.
    fn suppresses_duplicates(&self) -> bool {
        false
    }

    /// Stop as soon as the goal is generated instead of when it is taken off the frontier.
    fn goal_on_generation(&self) -> bool {
        false
    }

    fn root_key<G: GridMap>(&self, ctx: &SearchContext<'_, G>) -> Self::Key;

    fn score<G: GridMap>(
        &self,
        ctx: &SearchContext<'_, G>,
        parent: &FrontierEntry<Self::Key>,
        candidate: &Candidate,
    ) -> Self::Key;

    /// Takes the next entry to expand. Defaults to the front of the frontier.
    fn take(&self, frontier: &mut Frontier<Self::Key>) -> Option<FrontierEntry<Self::Key>> {
        frontier.pop_front()
    }

    /// Inserts freshly scored children. Defaults to appending and re-sorting everything.
    fn insert(&self, frontier: &mut Frontier<Self::Key>, children: Vec<FrontierEntry<Self::Key>>) {
        for child in children {
            frontier.push(child);
        }
        frontier.sort();
    }

    /// Runs the search from `start` to `goal`, returning the route and the expansion order.
    fn search<G: GridMap>(&self, grid: &G, start: Point, goal: Point) -> PathResult<Search> {
        check_endpoints(grid, start, goal)?;
        if start == goal {
            return Ok(Search {
                waypoints: vec![start],
                expanded: Vec::new(),
                tree_size: 1,
            });
        }
        if grid.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return Err(PathError::NoPathFound { start, goal });
        }
        info!("{} is reachable from {}, computing path", goal, start);

        let step_floor = grid.min_step_cost();
        let mut tree = SearchTree::new(start);
        let mut frontier = Frontier::new();
        let root_key = self.root_key(&SearchContext {
            grid,
            tree: &tree,
            start,
            goal,
            step_floor,
        });
        frontier.push(FrontierEntry {
            position: start,
            key: root_key,
            node: tree.root(),
        });

        let suppress = self.suppresses_duplicates();
        let mut closed: FxHashSet<Point> = FxHashSet::default();
        let mut expanded = Vec::new();

        while let Some(entry) = self.take(&mut frontier) {
            if suppress {
                closed.insert(entry.position);
                frontier.suppress(entry.position);
            }
            expanded.push(entry.position);
            if !self.goal_on_generation() && entry.position == goal {
                return Ok(finish(&tree, entry.node, expanded));
            }

            let found = candidates(grid, &tree, entry.node, suppress.then_some(&closed));
            let nodes = found
                .iter()
                .map(|c| tree.push(c.position, entry.node))
                .collect::<SmallVec<[usize; 4]>>();
            let ctx = SearchContext {
                grid,
                tree: &tree,
                start,
                goal,
                step_floor,
            };
            let children = found
                .iter()
                .zip(nodes)
                .map(|(c, node)| FrontierEntry {
                    position: c.position,
                    key: self.score(&ctx, &entry, c),
                    node,
                })
                .collect::<Vec<_>>();
            let reached = if self.goal_on_generation() {
                children.iter().find(|c| c.position == goal).map(|c| c.node)
            } else {
                None
            };
            self.insert(&mut frontier, children);
            if let Some(node) = reached {
                return Ok(finish(&tree, node, expanded));
            }
        }
        warn!("Frontier exhausted before reaching {} from {}", goal, start);
        Err(PathError::NoPathFound { start, goal })
    }

    /// The positions of the route from `start` to `goal`.
    fn get_waypoints<G: GridMap>(&self, grid: &G, start: Point, goal: Point) -> PathResult<Vec<Point>> {
        self.search(grid, start, goal).map(|s| s.waypoints)
    }

    /// The route from `start` to `goal` as concrete cells of `grid`.
    fn get_path<G: GridMap>(&self, grid: &G, start: Point, goal: Point) -> PathResult<Vec<Cell>> {
        self.get_waypoints(grid, start, goal)
            .map(|waypoints| waypoints.into_iter().map(|p| grid.cell(p)).collect())
    }
}

fn finish(tree: &SearchTree, node: usize, expanded: Vec<Point>) -> Search {
    let waypoints = tree.reconstruct(node);
    debug!(
        "Path of {} cells after {} expansions, {} tree nodes",
        waypoints.len(),
        expanded.len(),
        tree.len()
    );
    Search {
        waypoints,
        expanded,
        tree_size: tree.len(),
    }
}
