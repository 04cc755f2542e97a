//! Perfect maze generation and traced maze solving.
//!
//! [`generators`] builds a [`maze::Maze`], [`solvers`] searches it with one of five
//! algorithms, and every search returns a [`trace::Trace`]: the cells in the order they
//! were explored plus the final route, ready to be replayed step by step.

pub mod error;
pub mod generators;
pub mod maze;
pub mod solvers;
pub mod trace;

pub use error::{MazeError, Result};
pub use generators::{GeneratorConfig, generate_maze};
pub use maze::{Coord, Maze};
pub use solvers::{Solver, solve_maze};
pub use trace::{Step, Trace};
