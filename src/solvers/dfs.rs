use super::{open_neighbors, reconstruct_path};
use crate::maze::{Coord, Grid, Maze};
use crate::trace::{Step, Trace};

/// Depth-first search on an explicit stack. Neighbors are marked when pushed, so the most
/// recently pushed neighbor is explored first and every cell is visited at most once.
pub(super) fn solve_dfs(maze: &Maze, start: Coord, goal: Coord) -> Trace {
    let mut discovered = Grid::new(maze.rows(), maze.cols(), false);
    let mut parents: Grid<Option<Coord>> = Grid::new(maze.rows(), maze.cols(), None);
    let mut visited = Vec::new();
    let mut reached = false;

    let mut stack = vec![start];
    discovered[start] = true;

    while let Some(current) = stack.pop() {
        visited.push(Step::visited(current));
        if current == goal {
            reached = true;
            break;
        }

        for neighbor in open_neighbors(maze, current) {
            if !discovered[neighbor] {
                discovered[neighbor] = true;
                parents[neighbor] = Some(current);
                stack.push(neighbor);
            }
        }
    }

    let path = reconstruct_path(&parents, start, goal, reached);
    Trace::new(visited, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::fixtures::{coords, sample_maze};

    #[test]
    fn test_dfs_trace_on_sample() {
        let maze = sample_maze();
        let trace = solve_dfs(&maze, Coord::new(0, 0), Coord::new(2, 2));
        // (0,1) is pushed after (1,0), so it is popped first and dead-ends
        assert_eq!(
            coords(trace.visited()),
            vec![(0, 0), (0, 1), (1, 0), (2, 0), (2, 1), (2, 2)]
        );
        assert_eq!(
            coords(trace.path()),
            vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn test_dfs_reverse_direction() {
        let maze = sample_maze();
        let trace = solve_dfs(&maze, Coord::new(0, 2), Coord::new(0, 0));
        assert_eq!(
            coords(trace.path()),
            vec![(0, 2), (1, 2), (1, 1), (2, 1), (2, 0), (1, 0), (0, 0)]
        );
    }
}
