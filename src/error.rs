use crate::maze::Coord;

/// Precondition violations reported at the API boundary.
///
/// An unreachable goal or a braiding pass that ran out of attempts are regular results,
/// not errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    /// Either dimension of a requested maze is zero.
    #[error("invalid maze dimensions {rows}x{cols}: rows and cols must both be at least 1")]
    InvalidDimension { rows: usize, cols: usize },

    /// A coordinate lies outside the maze extents.
    #[error("coordinate {coord} is out of bounds for a {rows}x{cols} maze")]
    OutOfBounds { coord: Coord, rows: usize, cols: usize },

    /// A solver identifier could not be parsed.
    #[error("unknown solver `{0}` (expected one of BFS, DFS, A*, Dijkstra, Backtracking)")]
    UnknownSolver(String),
}

pub type Result<T> = std::result::Result<T, MazeError>;
