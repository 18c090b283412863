//! Per-request configuration.

use pathmaze_gen::MazeConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Options shared by single runs and batch benchmarks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RunOptions {
    pub maze: MazeConfig,
    /// Seed for reproducible mazes; fresh OS entropy when absent.
    pub seed: Option<u64>,
}

impl RunOptions {
    /// Options with a fixed seed and default generation settings.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// The rng a request should generate its maze with.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Parse a boolean request flag: `true`/`1` or `false`/`0`.
pub fn parse_flag(s: &str) -> Result<bool> {
    match s {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(Error::InvalidFlag(s.to_owned())),
    }
}
