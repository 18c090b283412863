//! Per-run measurements: time, memory, coverage and path length.

use std::time::{Duration, Instant};

use pathmaze_core::NodeGrid;
use serde::Serialize;

use crate::alloc;

/// Measurements of one completed search.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    #[serde(rename = "time", serialize_with = "as_secs")]
    pub elapsed: Duration,
    /// Change in live heap bytes across the run; may be negative.
    pub memory_delta_bytes: i64,
    pub visited_nodes: usize,
    /// Visited nodes as a percentage of the grid's open cells.
    pub visited_percentage: f64,
    /// Nodes on the reconstructed path, 0 if the end was not reached.
    pub path_length: usize,
}

fn as_secs<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

impl Metrics {
    /// Assemble metrics from a finished probe and the search outcome.
    pub fn new(sample: Sample, grid: &NodeGrid, trace: &[usize], path: &[usize]) -> Self {
        Self {
            elapsed: sample.elapsed,
            memory_delta_bytes: sample.memory_delta_bytes,
            visited_nodes: trace.len(),
            visited_percentage: visited_percentage(trace.len(), grid.open_count()),
            path_length: path.len(),
        }
    }

    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Memory delta in MiB.
    #[inline]
    pub fn memory_used_mib(&self) -> f64 {
        self.memory_delta_bytes as f64 / (1024.0 * 1024.0)
    }
}

/// `visited / open * 100`, or 0 for a grid without open cells.
pub fn visited_percentage(visited: usize, open: usize) -> f64 {
    if open == 0 {
        return 0.0;
    }
    visited as f64 / open as f64 * 100.0
}

/// Raw time and memory readings taken around a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub elapsed: Duration,
    pub memory_delta_bytes: i64,
}

/// Started immediately before a search and finished right after it.
#[derive(Debug)]
pub struct Probe {
    started: Instant,
    live_before: usize,
}

impl Probe {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            live_before: alloc::live_bytes(),
        }
    }

    pub fn finish(self) -> Sample {
        let elapsed = self.started.elapsed();
        let live_after = alloc::live_bytes();
        Sample {
            elapsed,
            memory_delta_bytes: live_after as i64 - self.live_before as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathmaze_core::Point;

    #[test]
    fn percentage_ignores_walls() {
        let g = NodeGrid::from_walls(4, 4, 0, Point::ZERO, Point::new(3, 3), |p| p.x == 1);
        let sample = Sample {
            elapsed: Duration::from_millis(1500),
            memory_delta_bytes: 3 << 20,
        };
        let m = Metrics::new(sample, &g, &[0, 4, 8], &[0, 4]);
        assert_eq!(m.visited_nodes, 3);
        assert_eq!(m.visited_percentage, 25.0);
        assert_eq!(m.path_length, 2);
        assert_eq!(m.elapsed_secs(), 1.5);
        assert_eq!(m.memory_used_mib(), 3.0);
    }

    #[test]
    fn no_open_cells_means_zero_percent() {
        assert_eq!(visited_percentage(0, 0), 0.0);
    }

    #[test]
    fn probe_measures_forward_time() {
        let probe = Probe::start();
        std::thread::sleep(Duration::from_millis(2));
        assert!(probe.finish().elapsed >= Duration::from_millis(2));
    }

    #[test]
    fn serializes_time_as_seconds() {
        let m = Metrics {
            elapsed: Duration::from_millis(250),
            memory_delta_bytes: -10,
            visited_nodes: 1,
            visited_percentage: 50.0,
            path_length: 1,
        };
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["time"], 0.25);
        assert_eq!(v["memoryDeltaBytes"], -10);
        assert_eq!(v["visitedPercentage"], 50.0);
    }
}
