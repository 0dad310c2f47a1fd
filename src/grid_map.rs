use grid_util::point::Point;

/// Cells whose traversal cost reaches this value are treated as walls by the cost-aware
/// strategies.
pub const IMPASSABLE_COST: u32 = 1000;

/// A single map tile: a traversal cost and an opaque kind tag.
pub trait Tile {
    fn cost(&self) -> u32;
    fn kind(&self) -> char;
}

/// Concrete cell handed back to the caller as part of a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub position: Point,
    pub cost: u32,
    pub kind: char,
}

impl Cell {
    pub fn row(&self) -> i32 {
        self.position.y
    }
    pub fn col(&self) -> i32 {
        self.position.x
    }
}

/// Read-only view of a rectangular, row-major map. Positions use `x` for the column and `y`
/// for the row; bounds are `[0, rows) x [0, cols)`.
pub trait GridMap {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    /// Cost of entering the cell at `pos`. Only called for in-bounds positions.
    fn cost(&self, pos: Point) -> u32;
    fn kind(&self, pos: Point) -> char;

    fn in_bounds(&self, pos: Point) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.y as usize) < self.rows() && (pos.x as usize) < self.cols()
    }

    fn passable(&self, pos: Point) -> bool {
        self.cost(pos) < IMPASSABLE_COST
    }

    fn cell(&self, pos: Point) -> Cell {
        Cell {
            position: pos,
            cost: self.cost(pos),
            kind: self.kind(pos),
        }
    }

    /// The cheapest passable per-step cost on the map, used to scale admissible heuristics.
    fn min_step_cost(&self) -> u32 {
        (0..self.rows() as i32)
            .flat_map(|y| (0..self.cols() as i32).map(move |x| Point::new(x, y)))
            .filter(|p| self.in_bounds(*p))
            .map(|p| self.cost(p))
            .filter(|&c| c < IMPASSABLE_COST)
            .min()
            .unwrap_or(1)
    }

    /// Cheap early-out for maps that know their connectivity. The default can not tell.
    fn unreachable(&self, _start: &Point, _goal: &Point) -> bool {
        false
    }
}

/// Rows may differ in length; `cols` is the longest row and bounds are checked per row.
impl<T: Tile> GridMap for Vec<Vec<T>> {
    fn rows(&self) -> usize {
        self.len()
    }
    fn cols(&self) -> usize {
        self.iter().map(Vec::len).max().unwrap_or(0)
    }
    fn in_bounds(&self, pos: Point) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && self
                .get(pos.y as usize)
                .map_or(false, |row| (pos.x as usize) < row.len())
    }
    fn cost(&self, pos: Point) -> u32 {
        self[pos.y as usize][pos.x as usize].cost()
    }
    fn kind(&self, pos: Point) -> char {
        self[pos.y as usize][pos.x as usize].kind()
    }
}

/// Manhattan distance between two positions.
pub fn manhattan(p1: &Point, p2: &Point) -> u32 {
    ((p1.x - p2.x).abs() + (p1.y - p2.y).abs()) as u32
}

/// Total cost of following `path`: the entry cost of every cell after the first.
pub fn path_cost(path: &[Cell]) -> u32 {
    path.iter().skip(1).map(|c| c.cost).sum()
}
