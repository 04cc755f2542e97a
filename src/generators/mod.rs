use rand::{Rng, SeedableRng, rngs::StdRng};

mod braid;
mod recur_backtrack;

pub use braid::{ATTEMPTS_PER_PASSAGE, braid};
pub use recur_backtrack::recursive_backtrack;

use crate::error::Result;
use crate::maze::Maze;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Settings for a "new maze" request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub rows: usize,
    pub cols: usize,
    /// Passages to open on top of the perfect maze. `0` keeps the maze perfect.
    pub extra_paths: usize,
    /// Seed for reproducible mazes. `None` draws from the operating system.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: 15,
            cols: 20,
            extra_paths: 50,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn generate(&self) -> Result<Maze> {
        generate_maze(self.rows, self.cols, self.extra_paths, self.seed)
    }
}

/// Generates a `rows` x `cols` maze: a perfect maze carved by the recursive backtracker,
/// then braided with up to `extra_paths` additional passages.
pub fn generate_maze(
    rows: usize,
    cols: usize,
    extra_paths: usize,
    seed: Option<u64>,
) -> Result<Maze> {
    generate_maze_with_rng(rows, cols, extra_paths, &mut get_rng(seed))
}

/// Same as [`generate_maze`], drawing all randomness from `rng`.
pub fn generate_maze_with_rng<R: Rng>(
    rows: usize,
    cols: usize,
    extra_paths: usize,
    rng: &mut R,
) -> Result<Maze> {
    let mut maze = Maze::new(rows, cols)?;
    let carved = recursive_backtrack(&mut maze, rng);
    let added = braid(&mut maze, extra_paths, rng);
    tracing::debug!(
        "[generator] {}x{} maze: {} passages carved, {} extra passages added",
        rows,
        cols,
        carved,
        added
    );
    Ok(maze)
}
