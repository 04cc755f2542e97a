use super::{open_neighbors, reconstruct_path};
use crate::maze::{Coord, Grid, Maze};
use crate::trace::{Step, Trace};

/// A* search with the Manhattan distance to the goal as heuristic.
///
/// The open set is a plain vector scanned linearly for the lowest `f = g + h`. Cells keep
/// their insertion order, and only a strictly lower score replaces the current best, so
/// ties go to the cell that entered the open set first. Scores of cells already in the
/// open set can still drop while they wait.
pub(super) fn solve_astar(maze: &Maze, start: Coord, goal: Coord) -> Trace {
    let (rows, cols) = (maze.rows(), maze.cols());
    let mut parents: Grid<Option<Coord>> = Grid::new(rows, cols, None);
    let mut g_score = Grid::new(rows, cols, usize::MAX);
    let mut f_score = Grid::new(rows, cols, usize::MAX);
    let mut closed = Grid::new(rows, cols, false);
    let mut visited = Vec::new();
    let mut reached = false;

    g_score[start] = 0;
    f_score[start] = start.manhattan(goal);
    let mut open = vec![start];

    while let Some(best) = lowest_f_score(&open, &f_score) {
        let current = open.remove(best);
        visited.push(Step::visited(current));
        if current == goal {
            reached = true;
            break;
        }
        closed[current] = true;

        let tentative = g_score[current] + 1;
        for neighbor in open_neighbors(maze, current) {
            if tentative >= g_score[neighbor] {
                continue;
            }
            parents[neighbor] = Some(current);
            g_score[neighbor] = tentative;
            f_score[neighbor] = tentative + neighbor.manhattan(goal);
            if !closed[neighbor] && !open.contains(&neighbor) {
                open.push(neighbor);
            }
        }
    }

    let path = reconstruct_path(&parents, start, goal, reached);
    Trace::new(visited, path)
}

/// Index of the first cell in `open` with the lowest f-score.
fn lowest_f_score(open: &[Coord], f_score: &Grid<usize>) -> Option<usize> {
    let mut cells = open.iter().enumerate();
    let (mut best, first) = cells.next()?;
    let mut best_score = f_score[*first];
    for (i, coord) in cells {
        if f_score[*coord] < best_score {
            best = i;
            best_score = f_score[*coord];
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Direction;
    use crate::solvers::fixtures::{coords, sample_maze};

    #[test]
    fn test_astar_trace_on_sample() {
        let maze = sample_maze();
        let trace = solve_astar(&maze, Coord::new(0, 0), Coord::new(2, 2));
        // (1,0) and (0,1) tie at f = 4, (1,0) was queued first. (1,1) is left in the
        // open set with f = 6 when the goal is popped.
        assert_eq!(
            coords(trace.visited()),
            vec![(0, 0), (1, 0), (0, 1), (2, 0), (2, 1), (2, 2)]
        );
        assert_eq!(
            coords(trace.path()),
            vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn test_astar_heads_straight_for_goal_in_open_room() {
        let mut maze = Maze::new(5, 5).unwrap();
        for row in 0..5 {
            for col in 0..5 {
                maze.carve_passage(Coord::new(row, col), Direction::Right);
                maze.carve_passage(Coord::new(row, col), Direction::Bottom);
            }
        }
        let trace = solve_astar(&maze, Coord::new(0, 0), Coord::new(0, 4));
        // The heuristic keeps the search on the top row
        assert_eq!(
            coords(trace.visited()),
            vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]
        );
        assert_eq!(trace.path_length(), Some(4));
    }

    #[test]
    fn test_lowest_f_score_prefers_first_on_tie() {
        let mut f_score = Grid::new(1, 3, 5);
        f_score[Coord::new(0, 2)] = 3;
        let open = [Coord::new(0, 0), Coord::new(0, 1)];
        assert_eq!(lowest_f_score(&open, &f_score), Some(0));
        let open = [Coord::new(0, 0), Coord::new(0, 2), Coord::new(0, 1)];
        assert_eq!(lowest_f_score(&open, &f_score), Some(1));
        assert_eq!(lowest_f_score(&[], &f_score), None);
    }
}
