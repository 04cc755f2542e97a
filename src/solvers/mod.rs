mod astar;
mod backtracking;
mod bfs;
mod dfs;
mod dijkstra;

use std::str::FromStr;

use crate::error::{MazeError, Result};
use crate::maze::{Coord, Direction, Grid, Maze};
use crate::trace::{Step, Trace};

use astar::solve_astar;
use backtracking::solve_backtracking;
use bfs::solve_bfs;
use dfs::solve_dfs;
use dijkstra::solve_dijkstra;

/// Order in which every solver expands the neighbors of a cell.
const SEARCH_ORDER: [Direction; 4] = [
    Direction::Top,
    Direction::Bottom,
    Direction::Left,
    Direction::Right,
];

/// Cells reachable from `coord` in one legal move, in [`SEARCH_ORDER`].
fn open_neighbors(maze: &Maze, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
    SEARCH_ORDER
        .into_iter()
        .filter_map(move |direction| maze.can_move(coord, direction))
}

/// Walks the parent links back from `goal` and returns the route as path steps ordered
/// from `start` to `goal`. Empty if `goal` was never reached.
fn reconstruct_path(
    parents: &Grid<Option<Coord>>,
    start: Coord,
    goal: Coord,
    reached: bool,
) -> Vec<Step> {
    if !reached {
        return Vec::new();
    }
    let mut path = vec![Step::path(goal)];
    let mut current = goal;
    while current != start {
        let Some(parent) = parents[current] else {
            return Vec::new();
        };
        path.push(Step::path(parent));
        current = parent;
    }
    path.reverse();
    path
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solver {
    Bfs,
    Dfs,
    AStar,
    Dijkstra,
    Backtracking,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::AStar => write!(f, "A* Search"),
            Solver::Dijkstra => write!(f, "Dijkstra's Algorithm"),
            Solver::Backtracking => write!(f, "Recursive Backtracking"),
        }
    }
}

impl FromStr for Solver {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Solver::Bfs),
            "dfs" => Ok(Solver::Dfs),
            "a*" | "astar" => Ok(Solver::AStar),
            "dijkstra" => Ok(Solver::Dijkstra),
            "backtracking" => Ok(Solver::Backtracking),
            _ => Err(MazeError::UnknownSolver(s.to_string())),
        }
    }
}

impl Solver {
    /// Available maze solvers
    pub const ALL: [Solver; 5] = [
        Solver::Bfs,
        Solver::Dfs,
        Solver::AStar,
        Solver::Dijkstra,
        Solver::Backtracking,
    ];

    /// Short identifier, the inverse of [`Solver::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            Solver::Bfs => "BFS",
            Solver::Dfs => "DFS",
            Solver::AStar => "A*",
            Solver::Dijkstra => "Dijkstra",
            Solver::Backtracking => "Backtracking",
        }
    }

    /// Searches `maze` from `start` to `goal` and returns the full trace.
    ///
    /// Fails with [`MazeError::OutOfBounds`] before any traversal if either endpoint lies
    /// outside the maze. An unreachable goal is not an error: the trace's path is empty.
    pub fn solve(&self, maze: &Maze, start: Coord, goal: Coord) -> Result<Trace> {
        maze.check_bounds(start)?;
        maze.check_bounds(goal)?;

        let trace = match self {
            Solver::Bfs => solve_bfs(maze, start, goal),
            Solver::Dfs => solve_dfs(maze, start, goal),
            Solver::AStar => solve_astar(maze, start, goal),
            Solver::Dijkstra => solve_dijkstra(maze, start, goal),
            Solver::Backtracking => solve_backtracking(maze, start, goal),
        };
        tracing::debug!(
            "[{}] {} -> {}: {} cells visited, path of {} cells",
            self.name(),
            start,
            goal,
            trace.visited().len(),
            trace.path().len()
        );
        Ok(trace)
    }
}

/// Solves `maze` from the top-left cell to the bottom-right cell.
pub fn solve_maze(maze: &Maze, solver: Solver) -> Result<Trace> {
    solver.solve(maze, maze.top_left(), maze.bottom_right())
}
