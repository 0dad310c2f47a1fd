use grid_util::point::Point;
use thiserror::Error;

/// Failures reported by the search strategies and [Agent](crate::agent::Agent).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("start {0} lies outside the map")]
    InvalidStart(Point),

    #[error("goal {0} lies outside the map")]
    InvalidGoal(Point),

    #[error("no path from {start} to {goal}")]
    NoPathFound { start: Point, goal: Point },

    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),
}

/// Failures while building a [TileMap](crate::tile_map::TileMap) from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("unknown terrain kind '{kind}' at row {row}, column {col}")]
    UnknownTerrain { kind: char, row: usize, col: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("map has no cells")]
    Empty,
}

pub type PathResult<T> = Result<T, PathError>;
