//! Request-scoped maze generation and concurrent search dispatch.
//!
//! Every call owns its maze, its five grid copies and its results; nothing
//! is kept in process-wide tables, so concurrent requests never observe each
//! other's runs.

use std::collections::BTreeMap;

use pathmaze_core::NodeGrid;
use pathmaze_gen::{Maze, MazeConfig};
use pathmaze_paths::{Algorithm, found_path};
use rand::Rng;
use rayon::prelude::*;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::metrics::{Metrics, Probe};
use crate::options::RunOptions;

/// Generate a maze after validating the requested size and settings.
pub fn generate_maze<R: Rng>(
    rows: i32,
    cols: i32,
    single_path: bool,
    config: &MazeConfig,
    rng: R,
) -> Result<Maze> {
    if rows <= 0 || cols <= 0 {
        return Err(Error::InvalidSize { rows, cols });
    }
    config.validate()?;
    Ok(Maze::generate(rows, cols, single_path, config, rng))
}

/// Run the algorithm called `name` on `grid`, returning its trace.
pub fn find_path(name: &str, grid: &mut NodeGrid, start: usize, end: usize) -> Result<Vec<usize>> {
    let algorithm: Algorithm = name.parse()?;
    Ok(algorithm.find_path(grid, start, end))
}

/// One algorithm's outcome on its own grid copy.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmRun {
    pub algorithm: Algorithm,
    /// The grid with the search state the algorithm left behind.
    pub grid: NodeGrid,
    pub start: usize,
    pub end: usize,
    /// Node indices in visit order.
    pub trace: Vec<usize>,
    /// Node indices from start to end; empty if the end was not reached.
    pub path: Vec<usize>,
    pub metrics: Metrics,
}

impl AlgorithmRun {
    /// Whether the search reached the end node.
    pub fn reached(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Run `algorithm` to completion on `grid`, which it consumes.
pub fn run_algorithm(algorithm: Algorithm, mut grid: NodeGrid) -> AlgorithmRun {
    let (start, end) = (grid.start(), grid.end());
    log::debug!("starting {algorithm} on grid {}", grid.grid_id());

    let probe = Probe::start();
    let trace = algorithm.find_path(&mut grid, start, end);
    let sample = probe.finish();

    let path = found_path(&grid, end).unwrap_or_default();
    let metrics = Metrics::new(sample, &grid, &trace, &path);
    log::debug!(
        "{algorithm}: visited {} nodes, path {} nodes, {:.3} ms",
        metrics.visited_nodes,
        metrics.path_length,
        metrics.elapsed_secs() * 1000.0
    );
    AlgorithmRun {
        algorithm,
        grid,
        start,
        end,
        trace,
        path,
        metrics,
    }
}

/// Every algorithm's run over one maze.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub width: i32,
    pub height: i32,
    pub single_path: bool,
    pub runs: BTreeMap<Algorithm, AlgorithmRun>,
}

impl RunReport {
    pub fn run(&self, algorithm: Algorithm) -> Option<&AlgorithmRun> {
        self.runs.get(&algorithm)
    }
}

/// Search every grid of `maze` concurrently, one task per algorithm.
///
/// Each task owns its grid and returns its own result; the results are
/// assembled only after all tasks have finished.
pub fn run_maze(maze: Maze) -> RunReport {
    let (width, height, single_path) = (maze.width(), maze.height(), maze.single_path());
    let runs: BTreeMap<Algorithm, AlgorithmRun> = maze
        .into_grids()
        .into_par_iter()
        .map(|(algorithm, grid)| (algorithm, run_algorithm(algorithm, grid)))
        .collect();
    log::info!("ran {} algorithms on {width}x{height} maze", runs.len());
    RunReport {
        width,
        height,
        single_path,
        runs,
    }
}

/// Generate one maze and race all five algorithms over it.
pub fn run_all(rows: i32, cols: i32, single_path: bool, options: &RunOptions) -> Result<RunReport> {
    let maze = generate_maze(rows, cols, single_path, &options.maze, options.rng())?;
    Ok(run_maze(maze))
}

/// Generate one maze and run only the algorithm called `name` on it.
///
/// The name is checked before any maze is generated.
pub fn run_named(
    rows: i32,
    cols: i32,
    single_path: bool,
    name: &str,
    options: &RunOptions,
) -> Result<AlgorithmRun> {
    let algorithm: Algorithm = name.parse()?;
    let maze = generate_maze(rows, cols, single_path, &options.maze, options.rng())?;
    let grid = maze.grid(algorithm).clone();
    Ok(run_algorithm(algorithm, grid))
}
