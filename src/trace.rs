//! The output of a solve and the cursor playback layers use to replay it.

use crate::maze::Coord;
use crate::solvers::Solver;

/// One coordinate tagged as either explored (`is_path == false`) or part of the final
/// route (`is_path == true`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    pub coord: Coord,
    pub is_path: bool,
}

impl Step {
    pub fn visited(coord: Coord) -> Self {
        Step {
            coord,
            is_path: false,
        }
    }

    pub fn path(coord: Coord) -> Self {
        Step {
            coord,
            is_path: true,
        }
    }
}

/// The full result of one solve: every cell in exploration order, then the route from
/// start to goal.
///
/// Both sequences are fully materialized when the solver returns and cannot be changed
/// afterwards. `path` is empty when the goal is unreachable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    visited: Vec<Step>,
    path: Vec<Step>,
}

impl Trace {
    pub(crate) fn new(visited: Vec<Step>, path: Vec<Step>) -> Self {
        debug_assert!(visited.iter().all(|s| !s.is_path));
        debug_assert!(path.iter().all(|s| s.is_path));
        Trace { visited, path }
    }

    pub fn visited(&self) -> &[Step] {
        &self.visited
    }

    pub fn path(&self) -> &[Step] {
        &self.path
    }

    /// Consumes the trace and returns its `(visited, path)` sequences.
    pub fn into_parts(self) -> (Vec<Step>, Vec<Step>) {
        (self.visited, self.path)
    }

    pub fn found_path(&self) -> bool {
        !self.path.is_empty()
    }

    /// Route length in edges, `None` if no route was found.
    pub fn path_length(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }

    /// All steps in playback order: the visited sequence, then the path.
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.visited.iter().chain(self.path.iter())
    }

    /// Total number of steps in playback order.
    pub fn len(&self) -> usize {
        self.visited.len() + self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn replay(&self) -> Replay<'_> {
        Replay {
            trace: self,
            revealed: 0,
        }
    }

    pub fn summary(&self, solver: Solver) -> TraceSummary {
        TraceSummary {
            solver,
            visited_count: self.visited.len(),
            path_cells: self.path.len(),
        }
    }
}

/// Step-by-step playback over a [`Trace`].
///
/// The cursor reveals visited steps first, then path steps, and can move in both
/// directions. Iterating yields each newly revealed step.
#[derive(Debug, Clone)]
pub struct Replay<'a> {
    trace: &'a Trace,
    /// Number of steps revealed so far, between 0 and `trace.len()`.
    revealed: usize,
}

impl<'a> Replay<'a> {
    /// Reveals the next step and returns it, or `None` when playback is finished.
    pub fn step_forward(&mut self) -> Option<&'a Step> {
        let step = self.step_at(self.revealed)?;
        self.revealed += 1;
        Some(step)
    }

    /// Hides the most recently revealed step and returns it, or `None` at the beginning.
    pub fn step_backward(&mut self) -> Option<&'a Step> {
        self.revealed = self.revealed.checked_sub(1)?;
        self.step_at(self.revealed)
    }

    /// The most recently revealed step.
    pub fn current(&self) -> Option<&'a Step> {
        self.revealed.checked_sub(1).and_then(|i| self.step_at(i))
    }

    /// The revealed prefix of the visited sequence.
    pub fn visible_visited(&self) -> &'a [Step] {
        let visited = self.trace.visited();
        &visited[..self.revealed.min(visited.len())]
    }

    /// The revealed prefix of the path sequence.
    pub fn visible_path(&self) -> &'a [Step] {
        let path_revealed = self.revealed.saturating_sub(self.trace.visited().len());
        &self.trace.path()[..path_revealed]
    }

    pub fn position(&self) -> usize {
        self.revealed
    }

    pub fn is_finished(&self) -> bool {
        self.revealed == self.trace.len()
    }

    pub fn reset(&mut self) {
        self.revealed = 0;
    }

    fn step_at(&self, index: usize) -> Option<&'a Step> {
        let visited = self.trace.visited();
        match index.checked_sub(visited.len()) {
            None => visited.get(index),
            Some(path_index) => self.trace.path().get(path_index),
        }
    }
}

impl<'a> Iterator for Replay<'a> {
    type Item = &'a Step;

    fn next(&mut self) -> Option<Self::Item> {
        self.step_forward()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.trace.len() - self.revealed;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Replay<'_> {}

/// Per-run counters a results table shows for a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceSummary {
    pub solver: Solver,
    pub visited_count: usize,
    /// Cells on the route, including start and goal. Zero when no route was found.
    pub path_cells: usize,
}
