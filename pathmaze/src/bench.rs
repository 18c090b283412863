//! Batch benchmark: many mazes per family, metrics collected per algorithm.

use std::collections::BTreeMap;

use pathmaze_paths::Algorithm;
use serde::Serialize;

use crate::error::Result;
use crate::metrics::Metrics;
use crate::options::RunOptions;
use crate::runner::{generate_maze, run_maze};

/// One metric column per measurement, one entry per maze.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSeries {
    pub time: Vec<f64>,
    pub visited_nodes: Vec<usize>,
    pub visited_percentage: Vec<f64>,
    pub path_length: Vec<usize>,
    pub memory_used: Vec<f64>,
}

/// Arithmetic means of a [`MetricSeries`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub time: f64,
    pub visited_nodes: f64,
    pub visited_percentage: f64,
    pub path_length: f64,
    pub memory_used: f64,
}

fn mean(xs: impl ExactSizeIterator<Item = f64>) -> f64 {
    let n = xs.len();
    if n == 0 {
        return 0.0;
    }
    xs.sum::<f64>() / n as f64
}

impl MetricSeries {
    pub fn push(&mut self, m: &Metrics) {
        self.time.push(m.elapsed_secs());
        self.visited_nodes.push(m.visited_nodes);
        self.visited_percentage.push(m.visited_percentage);
        self.path_length.push(m.path_length);
        self.memory_used.push(m.memory_used_mib());
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            time: mean(self.time.iter().copied()),
            visited_nodes: mean(self.visited_nodes.iter().map(|&v| v as f64)),
            visited_percentage: mean(self.visited_percentage.iter().copied()),
            path_length: mean(self.path_length.iter().map(|&v| v as f64)),
            memory_used: mean(self.memory_used.iter().copied()),
        }
    }
}

/// Results of [`run_batch`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub rows: i32,
    pub cols: i32,
    /// Mazes generated per family.
    pub count: usize,
    pub single_path: BTreeMap<Algorithm, MetricSeries>,
    pub multi_path: BTreeMap<Algorithm, MetricSeries>,
}

impl BatchReport {
    /// Mean metrics per algorithm for one maze family.
    pub fn summary(&self, single_path: bool) -> BTreeMap<Algorithm, Summary> {
        let family = if single_path {
            &self.single_path
        } else {
            &self.multi_path
        };
        family.iter().map(|(a, s)| (*a, s.summary())).collect()
    }
}

/// Run `count` single-path mazes, then `count` multi-path mazes, racing all
/// algorithms on each.
///
/// One rng drives the whole batch, so a seeded batch is reproducible.
pub fn run_batch(rows: i32, cols: i32, count: usize, options: &RunOptions) -> Result<BatchReport> {
    let mut rng = options.rng();
    let mut report = BatchReport {
        rows,
        cols,
        count,
        single_path: BTreeMap::new(),
        multi_path: BTreeMap::new(),
    };

    for single_path in [true, false] {
        for i in 0..count {
            let maze = generate_maze(rows, cols, single_path, &options.maze, &mut rng)?;
            let runs = run_maze(maze).runs;
            let family = if single_path {
                &mut report.single_path
            } else {
                &mut report.multi_path
            };
            for (algorithm, run) in &runs {
                family.entry(*algorithm).or_default().push(&run.metrics);
            }
            log::debug!("batch maze {}/{count} (single path: {single_path}) done", i + 1);
        }
    }
    log::info!("benchmarked {count} mazes per family at {rows}x{cols}");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::time::Duration;

    #[test]
    fn series_summary_is_the_mean() {
        let mut s = MetricSeries::default();
        for (n, ms) in [(10, 2), (30, 4)] {
            s.push(&Metrics {
                elapsed: Duration::from_millis(ms),
                memory_delta_bytes: 0,
                visited_nodes: n,
                visited_percentage: n as f64,
                path_length: n / 2,
            });
        }
        assert_eq!(s.len(), 2);
        let sum = s.summary();
        assert_eq!(sum.visited_nodes, 20.0);
        assert_eq!(sum.path_length, 10.0);
        assert!((sum.time - 0.003).abs() < 1e-9);
        assert_eq!(MetricSeries::default().summary(), Summary::default());
    }

    #[test]
    fn batch_fills_both_families() {
        let report = run_batch(11, 11, 3, &RunOptions::seeded(12)).unwrap();
        for family in [&report.single_path, &report.multi_path] {
            assert_eq!(family.len(), 5);
            assert!(family.values().all(|s| s.len() == 3));
        }
        let single = report.summary(true);
        assert_eq!(
            single[&Algorithm::Bfs].path_length,
            single[&Algorithm::Dijkstra].path_length
        );
    }

    #[test]
    fn batch_rejects_bad_size() {
        assert!(matches!(
            run_batch(-1, 4, 2, &RunOptions::seeded(0)),
            Err(Error::InvalidSize { .. })
        ));
    }

    #[test]
    fn empty_batch_is_fine() {
        let report = run_batch(9, 9, 0, &RunOptions::seeded(0)).unwrap();
        assert!(report.single_path.is_empty());
        assert!(report.summary(false).is_empty());
    }
}
