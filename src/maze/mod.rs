pub mod cell;
pub mod grid;

use std::fmt;

pub use cell::{Cell, Terrain, Walls};
pub use grid::Grid;

use crate::error::{MazeError, Result};

/// A `(row, col)` position, both zero-based.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Manhattan distance between two coordinates.
    pub fn manhattan(self, other: Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four sides of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// Clockwise starting from the top.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }

    /// The coordinate one step away in this direction, or `None` on underflow.
    /// The upper bound is not checked here.
    fn step(self, from: Coord) -> Option<Coord> {
        let Coord { row, col } = from;
        match self {
            Direction::Top => row.checked_sub(1).map(|r| Coord::new(r, col)),
            Direction::Right => col.checked_add(1).map(|c| Coord::new(row, c)),
            Direction::Bottom => row.checked_add(1).map(|r| Coord::new(r, col)),
            Direction::Left => col.checked_sub(1).map(|c| Coord::new(row, c)),
        }
    }
}

/// A rectangular maze of [`Cell`]s.
///
/// Every wall mutation goes through [`Maze::carve_passage`], which clears both sides of a
/// boundary at once, so adjacent cells always agree on the wall between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    grid: Grid<Cell>,
}

impl Maze {
    /// Creates a new maze with the given number of rows and columns.
    /// Every cell starts with all four walls present.
    ///
    /// Returns [`MazeError::InvalidDimension`] if either dimension is zero or the cell
    /// count `rows * cols` does not fit in a `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
            return Err(MazeError::InvalidDimension { rows, cols });
        }
        Ok(Maze {
            grid: Grid::from_fn(rows, cols, Cell::new),
        })
    }

    /// Returns the number of rows in the maze.
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Returns the number of columns in the maze.
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// The top-left cell.
    pub fn top_left(&self) -> Coord {
        Coord::new(0, 0)
    }

    /// The bottom-right cell.
    pub fn bottom_right(&self) -> Coord {
        Coord::new(self.rows() - 1, self.cols() - 1)
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.grid.is_in_bounds(coord)
    }

    /// Like [`Maze::is_in_bounds`], but reports the failure as a [`MazeError::OutOfBounds`].
    pub fn check_bounds(&self, coord: Coord) -> Result<()> {
        if self.is_in_bounds(coord) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                coord,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.iter()
    }

    /// Returns the neighboring coordinate in `direction`, if it lies inside the maze.
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        direction.step(coord).filter(|&c| self.is_in_bounds(c))
    }

    /// Checks whether `coord` has a wall on the `direction` side.
    ///
    /// # Panics
    /// If `coord` is out of bounds.
    pub fn has_wall(&self, coord: Coord, direction: Direction) -> bool {
        self[coord].has_wall(direction)
    }

    /// Returns the destination of a move from `from` one step in `direction`, or `None` if
    /// the move is illegal: the destination lies outside the maze or a wall is in the way.
    pub fn can_move(&self, from: Coord, direction: Direction) -> Option<Coord> {
        if !self.is_in_bounds(from) || self.has_wall(from, direction) {
            return None;
        }
        let to = self.neighbor(from, direction)?;
        debug_assert!(
            !self.has_wall(to, direction.opposite()),
            "asymmetric wall between {} and {}",
            from,
            to
        );
        Some(to)
    }

    /// Removes the wall between `from` and its neighbor in `direction`, on both sides.
    ///
    /// # Returns
    /// `true` if a wall was removed, `false` if the passage was already open or the
    /// neighbor lies outside the maze (boundary walls are never carved).
    pub fn carve_passage(&mut self, from: Coord, direction: Direction) -> bool {
        let Some(to) = self.neighbor(from, direction) else {
            return false;
        };
        if !self.is_in_bounds(from) || !self.has_wall(from, direction) {
            return false;
        }
        self.grid[from].set_wall(direction, false);
        self.grid[to].set_wall(direction.opposite(), false);
        true
    }

    /// Number of open passages between adjacent cells, each boundary counted once.
    pub fn passage_count(&self) -> usize {
        self.cells()
            .map(|cell| {
                [Direction::Right, Direction::Bottom]
                    .into_iter()
                    .filter(|&d| self.can_move(cell.coord(), d).is_some())
                    .count()
            })
            .sum()
    }

    /// Annotates a cell with a terrain tag, or clears it with `None`.
    pub fn set_terrain(&mut self, coord: Coord, terrain: Option<Terrain>) -> Result<()> {
        self.check_bounds(coord)?;
        self.grid[coord].set_terrain(terrain);
        Ok(())
    }

    /// Flags or unflags a cell as a bomb.
    pub fn set_bomb(&mut self, coord: Coord, bomb: bool) -> Result<()> {
        self.check_bounds(coord)?;
        self.grid[coord].set_bomb(bomb);
        Ok(())
    }

    pub(crate) fn set_visited(&mut self, coord: Coord, visited: bool) {
        self.grid[coord].set_visited(visited);
    }

    /// Clears the generation-only `visited` marker on every cell.
    pub(crate) fn reset_visited(&mut self) {
        self.grid
            .iter_mut()
            .for_each(|cell| cell.set_visited(false));
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.grid[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maze_new_is_fully_walled() {
        let maze = Maze::new(3, 4).unwrap();
        assert_eq!(maze.rows(), 3);
        assert_eq!(maze.cols(), 4);
        assert!(maze.cells().all(|c| c.walls() == Walls::CLOSED));
        assert_eq!(maze.passage_count(), 0);
        assert_eq!(maze[Coord::new(2, 1)].coord(), Coord::new(2, 1));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Maze::new(0, 5),
            Err(MazeError::InvalidDimension { rows: 0, cols: 5 })
        );
        assert!(Maze::new(5, 0).is_err());
        assert!(Maze::new(1, 1).is_ok());
    }

    #[test]
    fn test_overflowing_dimensions() {
        assert_eq!(
            Maze::new(usize::MAX, 2),
            Err(MazeError::InvalidDimension {
                rows: usize::MAX,
                cols: 2
            })
        );
        assert!(Maze::new(2, usize::MAX / 2 + 1).is_err());
    }

    #[test]
    fn test_carve_passage_is_symmetric() {
        let mut maze = Maze::new(3, 3).unwrap();
        assert!(maze.carve_passage(Coord::new(1, 1), Direction::Right));
        assert!(!maze.has_wall(Coord::new(1, 1), Direction::Right));
        assert!(!maze.has_wall(Coord::new(1, 2), Direction::Left));
        // Carving the same boundary from the other side is a no-op
        assert!(!maze.carve_passage(Coord::new(1, 2), Direction::Left));
        assert_eq!(maze.passage_count(), 1);
    }

    #[test]
    fn test_boundary_walls_are_never_carved() {
        let mut maze = Maze::new(2, 2).unwrap();
        assert!(!maze.carve_passage(Coord::new(0, 0), Direction::Top));
        assert!(!maze.carve_passage(Coord::new(0, 0), Direction::Left));
        assert!(!maze.carve_passage(Coord::new(1, 1), Direction::Bottom));
        assert!(maze.has_wall(Coord::new(0, 0), Direction::Top));
    }

    #[test]
    fn test_can_move() {
        let mut maze = Maze::new(2, 2).unwrap();
        assert_eq!(maze.can_move(Coord::new(0, 0), Direction::Bottom), None);
        maze.carve_passage(Coord::new(0, 0), Direction::Bottom);
        assert_eq!(
            maze.can_move(Coord::new(0, 0), Direction::Bottom),
            Some(Coord::new(1, 0))
        );
        assert_eq!(
            maze.can_move(Coord::new(1, 0), Direction::Top),
            Some(Coord::new(0, 0))
        );
        assert_eq!(maze.can_move(Coord::new(5, 5), Direction::Top), None);
    }

    #[test]
    fn test_out_of_bounds() {
        let maze = Maze::new(5, 5).unwrap();
        assert!(!maze.is_in_bounds(Coord::new(5, 5)));
        assert!(!maze.is_in_bounds(Coord::new(0, 5)));
        assert!(!maze.is_in_bounds(Coord::new(5, 0)));
        assert!(maze.is_in_bounds(Coord::new(4, 4)));
        assert_eq!(
            maze.check_bounds(Coord::new(7, 0)),
            Err(MazeError::OutOfBounds {
                coord: Coord::new(7, 0),
                rows: 5,
                cols: 5
            })
        );
    }

    #[test]
    fn test_neighbor_at_edges() {
        let maze = Maze::new(2, 3).unwrap();
        assert_eq!(maze.neighbor(Coord::new(0, 0), Direction::Top), None);
        assert_eq!(maze.neighbor(Coord::new(0, 0), Direction::Left), None);
        assert_eq!(maze.neighbor(Coord::new(1, 2), Direction::Right), None);
        assert_eq!(
            maze.neighbor(Coord::new(1, 2), Direction::Top),
            Some(Coord::new(0, 2))
        );
    }

    #[test]
    fn test_annotations_are_bounds_checked() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.set_terrain(Coord::new(1, 1), Some(Terrain::Water))
            .unwrap();
        maze.set_bomb(Coord::new(0, 1), true).unwrap();
        assert_eq!(maze[Coord::new(1, 1)].terrain(), Some(Terrain::Water));
        assert!(maze[Coord::new(0, 1)].is_bomb());
        assert!(maze.set_bomb(Coord::new(2, 0), true).is_err());
        assert!(maze.set_terrain(Coord::new(0, 2), None).is_err());
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(Coord::new(0, 0).manhattan(Coord::new(2, 3)), 5);
        assert_eq!(Coord::new(4, 1).manhattan(Coord::new(1, 4)), 6);
    }
}
