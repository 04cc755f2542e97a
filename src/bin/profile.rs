use std::time::Instant;

use mazetrace::{GeneratorConfig, MazeError, Solver, solve_maze};

/// Profiling mode: generate and solve mazes in a loop, logging to `profile.log`.
///
/// Usage: `profile [iterations] [solver]`. Without a solver, every solver runs on each maze.
fn main() -> Result<(), MazeError> {
    let file_appender = tracing_appender::rolling::never(".", "profile.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1);
    let solvers = match args.next() {
        Some(name) => vec![name.parse::<Solver>()?],
        None => Solver::ALL.to_vec(),
    };

    let config = GeneratorConfig {
        rows: 64,
        cols: 64,
        ..GeneratorConfig::default()
    };
    tracing::info!("Profiling {} iterations on {:?}", num_iters, config);

    for iteration in 0..num_iters {
        let maze = config.generate()?;
        for &solver in &solvers {
            let started = Instant::now();
            let trace = solve_maze(&maze, solver)?;
            let summary = trace.summary(solver);
            tracing::info!(
                "[profile] iteration {}: {} visited {} cells, path of {} cells in {:?}",
                iteration,
                summary.solver,
                summary.visited_count,
                summary.path_cells,
                started.elapsed()
            );
        }
    }
    Ok(())
}
