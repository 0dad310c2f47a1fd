use crate::error::MapError;
use crate::grid_map::{GridMap, Tile};
use core::fmt;
use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use std::str::FromStr;

/// The tile set of the simulation. Stone is a wall for every cost-aware strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Terrain {
    #[default]
    Road,
    Grass,
    Mud,
    Dune,
    Water,
    Stone,
}

impl Terrain {
    pub fn from_kind(kind: char) -> Option<Terrain> {
        match kind {
            'r' => Some(Terrain::Road),
            'g' => Some(Terrain::Grass),
            'm' => Some(Terrain::Mud),
            'd' => Some(Terrain::Dune),
            'w' => Some(Terrain::Water),
            's' => Some(Terrain::Stone),
            _ => None,
        }
    }
}

impl Tile for Terrain {
    fn cost(&self) -> u32 {
        match self {
            Terrain::Road => 2,
            Terrain::Grass => 3,
            Terrain::Mud => 5,
            Terrain::Dune => 7,
            Terrain::Water => 500,
            Terrain::Stone => 1000,
        }
    }
    fn kind(&self) -> char {
        match self {
            Terrain::Road => 'r',
            Terrain::Grass => 'g',
            Terrain::Mud => 'm',
            Terrain::Dune => 'd',
            Terrain::Water => 'w',
            Terrain::Stone => 's',
        }
    }
}

/// [TileMap] stores the [Terrain] of every cell in a [SimpleGrid] and maintains the
/// 4-connected components of passable cells in a [UnionFind], so that searches towards an
/// unreachable goal fail without flood-filling the map.
/// Implements [Grid] by building on [SimpleGrid] and [GridMap] for the search strategies.
#[derive(Clone, Debug)]
pub struct TileMap {
    pub grid: SimpleGrid<Terrain>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl TileMap {
    /// In bounds and passable.
    fn open(&self, pos: Point) -> bool {
        GridMap::in_bounds(self, pos) && GridMap::passable(self, pos)
    }

    fn ix(&self, pos: &Point) -> usize {
        pos.y as usize * self.grid.width() + pos.x as usize
    }

    fn cardinal_points(pos: &Point) -> [Point; 4] {
        [
            Point::new(pos.x, pos.y - 1),
            Point::new(pos.x + 1, pos.y),
            Point::new(pos.x, pos.y + 1),
            Point::new(pos.x - 1, pos.y),
        ]
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !GridMap::unreachable(self, start, goal)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up passable cardinal neighbours.
    pub fn generate_components(&mut self) {
        let w = self.grid.width();
        let h = self.grid.height();
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                let point = Point::new(x, y);
                if !self.open(point) {
                    continue;
                }
                let parent_ix = self.ix(&point);
                for p in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.open(p) {
                        let ix = self.ix(&p);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl GridMap for TileMap {
    fn rows(&self) -> usize {
        self.grid.height()
    }
    fn cols(&self) -> usize {
        self.grid.width()
    }
    fn cost(&self, pos: Point) -> u32 {
        self.grid.get(pos.x as usize, pos.y as usize).cost()
    }
    fn kind(&self, pos: Point) -> char {
        self.grid.get(pos.x as usize, pos.y as usize).kind()
    }

    /// Stale components can not answer, in which case the search runs and decides. A start on
    /// a wall is judged by its passable neighbours, since the agent may step off it.
    fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.components_dirty
            || !GridMap::in_bounds(self, *start)
            || !GridMap::in_bounds(self, *goal)
        {
            return false;
        }
        if !self.open(*goal) {
            return true;
        }
        let goal_ix = self.ix(goal);
        if self.open(*start) {
            !self.components.equiv(self.ix(start), goal_ix)
        } else {
            !TileMap::cardinal_points(start)
                .iter()
                .any(|p| self.open(*p) && self.components.equiv(self.ix(p), goal_ix))
        }
    }
}

impl Grid<Terrain> for TileMap {
    fn new(width: usize, height: usize, default_value: Terrain) -> Self {
        let mut map = TileMap {
            grid: SimpleGrid::new(width, height, default_value),
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        map.generate_components();
        map
    }
    fn get(&self, x: usize, y: usize) -> Terrain {
        self.grid.get(x, y)
    }
    /// Updates a cell. Joins newly connected components and flags the components as dirty
    /// if a wall (potentially) splits one into several.
    fn set(&mut self, x: usize, y: usize, terrain: Terrain) {
        let p = Point::new(x as i32, y as i32);
        let was_passable = self.open(p);
        self.grid.set(x, y, terrain);
        let is_passable = self.open(p);
        if was_passable && !is_passable {
            self.components_dirty = true;
        } else if is_passable {
            let p_ix = self.ix(&p);
            for n in TileMap::cardinal_points(&p) {
                if self.open(n) {
                    let n_ix = self.ix(&n);
                    self.components.union(p_ix, n_ix);
                }
            }
        }
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}

/// Parses one row of kind characters per line, e.g. `"rrg\nrsr\nwrr"`. Whitespace around
/// lines is ignored.
impl FromStr for TileMap {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<&str>>();
        let width = rows.first().map_or(0, |line| line.chars().count());
        if width == 0 {
            return Err(MapError::Empty);
        }
        let mut map = TileMap {
            grid: SimpleGrid::new(width, rows.len(), Terrain::Road),
            components: UnionFind::new(width * rows.len()),
            components_dirty: false,
        };
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MapError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, kind) in line.chars().enumerate() {
                let terrain =
                    Terrain::from_kind(kind).ok_or(MapError::UnknownTerrain { kind, row, col })?;
                map.grid.set(col, row, terrain);
            }
        }
        map.generate_components();
        Ok(map)
    }
}

impl fmt::Display for TileMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.grid.height() {
            let line = (0..self.grid.width())
                .map(|x| self.grid.get(x, y).kind())
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
