use super::{Coord, Direction};

/// Terrain annotation carried by a cell.
///
/// Informational only: no solver assigns it a movement cost.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terrain {
    #[default]
    Normal,
    Soil,
    Water,
    River,
}

/// The four wall flags of a cell. `true` means the wall is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Walls {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Walls {
    /// All four walls present.
    pub const CLOSED: Walls = Walls {
        top: true,
        right: true,
        bottom: true,
        left: true,
    };

    pub fn get(&self, direction: Direction) -> bool {
        match direction {
            Direction::Top => self.top,
            Direction::Right => self.right,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
        }
    }

    pub(crate) fn set(&mut self, direction: Direction, present: bool) {
        match direction {
            Direction::Top => self.top = present,
            Direction::Right => self.right = present,
            Direction::Bottom => self.bottom = present,
            Direction::Left => self.left = present,
        }
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::CLOSED
    }
}

/// A single maze cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    coord: Coord,
    walls: Walls,
    /// Generation-only bookkeeping, always `false` once a maze is handed out.
    visited: bool,
    terrain: Option<Terrain>,
    bomb: bool,
}

impl Cell {
    /// A fully walled cell at `coord`, with no terrain and no bomb.
    pub fn new(coord: Coord) -> Self {
        Cell {
            coord,
            walls: Walls::CLOSED,
            visited: false,
            terrain: None,
            bomb: false,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn walls(&self) -> Walls {
        self.walls
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls.get(direction)
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn terrain(&self) -> Option<Terrain> {
        self.terrain
    }

    pub fn is_bomb(&self) -> bool {
        self.bomb
    }

    pub(crate) fn set_wall(&mut self, direction: Direction, present: bool) {
        self.walls.set(direction, present);
    }

    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    pub(crate) fn set_terrain(&mut self, terrain: Option<Terrain>) {
        self.terrain = terrain;
    }

    pub(crate) fn set_bomb(&mut self, bomb: bool) {
        self.bomb = bomb;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_closed() {
        let cell = Cell::new(Coord::new(1, 2));
        assert_eq!(cell.walls(), Walls::CLOSED);
        assert!(!cell.is_visited());
        assert!(!cell.is_bomb());
        assert_eq!(cell.terrain(), None);
        assert_eq!(cell.coord(), Coord::new(1, 2));
    }

    #[test]
    fn test_walls_set_is_per_direction() {
        let mut walls = Walls::CLOSED;
        walls.set(Direction::Right, false);
        assert!(!walls.get(Direction::Right));
        assert!(walls.top && walls.bottom && walls.left);
    }
}
