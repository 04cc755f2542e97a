use rand::{Rng, seq::SliceRandom};

use crate::maze::{Coord, Direction, Maze};

/// A cell on the carving stack together with its shuffled directions and how many of
/// them have been tried.
struct Frame {
    coord: Coord,
    directions: [Direction; 4],
    next: usize,
}

impl Frame {
    fn enter<R: Rng>(maze: &mut Maze, coord: Coord, rng: &mut R) -> Self {
        maze.set_visited(coord, true);
        let mut directions = Direction::ALL;
        directions.shuffle(rng);
        Frame {
            coord,
            directions,
            next: 0,
        }
    }
}

/// Carves a perfect maze with the randomized recursive backtracker, starting at the
/// top-left cell.
///
/// Each cell shuffles its four directions when first entered and descends into every
/// still-unvisited neighbor in that order, exactly as the recursive formulation does.
/// The recursion is kept on an explicit stack so deep mazes cannot overflow the call stack.
///
/// All walls are expected to be present on entry. The `visited` marker of every cell is
/// cleared before returning.
pub fn recursive_backtrack<R: Rng>(maze: &mut Maze, rng: &mut R) -> usize {
    let start = maze.top_left();
    let mut carved = 0;
    let mut stack = vec![Frame::enter(maze, start, rng)];

    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.directions.len() {
            // Every direction tried, unwind to the previous cell
            stack.pop();
            continue;
        }
        let direction = frame.directions[frame.next];
        frame.next += 1;
        let cell = frame.coord;

        let Some(neighbor) = maze.neighbor(cell, direction) else {
            continue;
        };
        if maze[neighbor].is_visited() {
            continue;
        }

        maze.carve_passage(cell, direction);
        carved += 1;
        stack.push(Frame::enter(maze, neighbor, rng));
    }

    maze.reset_visited();
    carved
}
