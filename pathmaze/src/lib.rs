//! **pathmaze**: generate a maze and race five search algorithms over it.
//!
//! A request picks a size and whether the maze should have a single route
//! (a perfect maze) or several. One maze is generated, cloned once per
//! algorithm, and Dijkstra, A*, BFS, DFS and a wall follower run on their
//! own copies in parallel. Each run reports its visit trace, the
//! reconstructed path and [`Metrics`].
//!
//! ```no_run
//! use pathmaze::{RunOptions, run_all};
//!
//! let report = run_all(21, 21, true, &RunOptions::seeded(7))?;
//! for (algorithm, run) in &report.runs {
//!     println!("{algorithm}: {} visited, path {}", run.trace.len(), run.path.len());
//! }
//! # Ok::<(), pathmaze::Error>(())
//! ```

pub mod alloc;
pub mod bench;
pub mod error;
pub mod logger;
pub mod metrics;
pub mod options;
pub mod render;
pub mod runner;

pub use bench::{BatchReport, MetricSeries, Summary, run_batch};
pub use error::{Error, Result};
pub use metrics::Metrics;
pub use options::{RunOptions, parse_flag};
pub use render::{render, render_grid};
pub use runner::{
    AlgorithmRun, RunReport, find_path, generate_maze, run_algorithm, run_all, run_maze, run_named,
};
pub use pathmaze_gen::MazeConfig;
pub use pathmaze_paths::Algorithm;
