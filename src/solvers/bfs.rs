use std::collections::VecDeque;

use super::{open_neighbors, reconstruct_path};
use crate::maze::{Coord, Grid, Maze};
use crate::trace::{Step, Trace};

/// Breadth-first search. Cells are marked as discovered when queued, so the first parent
/// found for a cell is kept and the route is a shortest one in edge count.
pub(super) fn solve_bfs(maze: &Maze, start: Coord, goal: Coord) -> Trace {
    let mut discovered = Grid::new(maze.rows(), maze.cols(), false);
    let mut parents: Grid<Option<Coord>> = Grid::new(maze.rows(), maze.cols(), None);
    let mut visited = Vec::new();
    let mut reached = false;

    let mut queue = VecDeque::from([start]);
    discovered[start] = true;

    while let Some(current) = queue.pop_front() {
        visited.push(Step::visited(current));
        if current == goal {
            reached = true;
            break;
        }

        for neighbor in open_neighbors(maze, current) {
            if !discovered[neighbor] {
                discovered[neighbor] = true;
                parents[neighbor] = Some(current);
                queue.push_back(neighbor);
            }
        }
    }

    let path = reconstruct_path(&parents, start, goal, reached);
    Trace::new(visited, path)
}
