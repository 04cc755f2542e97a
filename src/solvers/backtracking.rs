use super::SEARCH_ORDER;
use crate::maze::{Coord, Grid, Maze};
use crate::trace::{Step, Trace};

/// Recursive backtracking on an explicit stack.
///
/// A cell is entered at most once and never if it is flagged as a bomb. Directions are
/// tried in the fixed [`SEARCH_ORDER`]; when all of them fail the cell is abandoned and
/// the search resumes at its caller. On reaching the goal the frames still on the stack
/// are exactly the route, which is the first one found and not necessarily the shortest.
pub(super) fn solve_backtracking(maze: &Maze, start: Coord, goal: Coord) -> Trace {
    let mut entered = Grid::new(maze.rows(), maze.cols(), false);
    let mut visited = Vec::new();

    // Each frame is a cell on the current branch and the index of its next direction
    let mut stack: Vec<(Coord, usize)> = Vec::new();

    let mut enter = |coord: Coord, visited: &mut Vec<Step>| -> bool {
        if entered[coord] || maze[coord].is_bomb() {
            return false;
        }
        entered[coord] = true;
        visited.push(Step::visited(coord));
        true
    };

    if !enter(start, &mut visited) {
        return Trace::new(visited, Vec::new());
    }
    if start == goal {
        return Trace::new(visited, vec![Step::path(start)]);
    }
    stack.push((start, 0));

    while let Some((cell, next)) = stack.last_mut() {
        let Some(&direction) = SEARCH_ORDER.get(*next) else {
            // Dead end, unwind
            stack.pop();
            continue;
        };
        *next += 1;
        let cell = *cell;

        let Some(neighbor) = maze.can_move(cell, direction) else {
            continue;
        };
        if !enter(neighbor, &mut visited) {
            continue;
        }
        if neighbor == goal {
            let path = stack
                .iter()
                .map(|&(coord, _)| Step::path(coord))
                .chain(std::iter::once(Step::path(goal)))
                .collect();
            return Trace::new(visited, path);
        }
        stack.push((neighbor, 0));
    }

    tracing::debug!("[backtracking] every branch from {} exhausted", start);
    Trace::new(visited, Vec::new())
}
