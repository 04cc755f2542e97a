use rand::Rng;

use crate::maze::{Coord, Direction, Maze};

/// Number of random picks allowed per requested extra passage.
pub const ATTEMPTS_PER_PASSAGE: usize = 10;

/// Opens up to `extra_paths` additional passages in an already carved maze, which
/// introduces cycles and alternate routes.
///
/// Each attempt picks a uniformly random cell and direction and removes the wall there if
/// one is present on both sides of an interior boundary. At most
/// `extra_paths * ATTEMPTS_PER_PASSAGE` attempts are made; running out is not an error.
///
/// Returns the number of passages actually added.
pub fn braid<R: Rng>(maze: &mut Maze, extra_paths: usize, rng: &mut R) -> usize {
    let max_attempts = extra_paths.saturating_mul(ATTEMPTS_PER_PASSAGE);
    let mut added = 0;
    let mut attempts = 0;

    while added < extra_paths && attempts < max_attempts {
        let cell = Coord::new(
            rng.random_range(0..maze.rows()),
            rng.random_range(0..maze.cols()),
        );
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        if maze.carve_passage(cell, direction) {
            added += 1;
        }
        attempts += 1;
    }

    if added < extra_paths {
        tracing::debug!(
            "[braid] added {} of {} extra passages after {} attempts",
            added,
            extra_paths,
            attempts
        );
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{get_rng, recursive_backtrack};

    #[test]
    fn test_braid_adds_passages() {
        let mut maze = Maze::new(10, 10).unwrap();
        let mut rng = get_rng(Some(21));
        recursive_backtrack(&mut maze, &mut rng);
        let added = braid(&mut maze, 5, &mut rng);
        assert!(added <= 5);
        assert_eq!(maze.passage_count(), 10 * 10 - 1 + added);
    }

    #[test]
    fn test_braid_zero_is_noop() {
        let mut maze = Maze::new(4, 4).unwrap();
        let mut rng = get_rng(Some(2));
        recursive_backtrack(&mut maze, &mut rng);
        let before = maze.clone();
        assert_eq!(braid(&mut maze, 0, &mut rng), 0);
        assert_eq!(maze, before);
    }

    #[test]
    fn test_braid_saturates_without_failing() {
        // A 2x2 maze has four interior boundaries, three of them carved by the generator
        let mut maze = Maze::new(2, 2).unwrap();
        let mut rng = get_rng(Some(8));
        recursive_backtrack(&mut maze, &mut rng);
        let added = braid(&mut maze, 50, &mut rng);
        assert!(added <= 1);
        assert!(maze.passage_count() <= 4);
    }

    #[test]
    fn test_braid_on_single_cell() {
        let mut maze = Maze::new(1, 1).unwrap();
        assert_eq!(braid(&mut maze, 3, &mut get_rng(Some(0))), 0);
    }
}
