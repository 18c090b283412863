/// Tuning knobs for [`MazeGen`](crate::MazeGen).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct MazeConfig {
    /// Probability of stepping to a uniformly random unvisited neighbor.
    /// Otherwise the neighbor farthest from the start is taken, which
    /// stretches corridors.
    pub random_pick: f64,
    /// Probability of jumping to a random cell of the backtrack stack
    /// instead of popping the most recent one.
    pub random_backtrack: f64,
    /// Fraction of `rows * cols` interior cells forced open in multi-path
    /// mazes.
    pub extra_openings: f64,
}

/// A [`MazeConfig`] probability outside its allowed range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("maze config {field} = {value} is out of range {range}")]
pub struct InvalidMazeConfig {
    pub field: &'static str,
    pub value: f64,
    pub range: &'static str,
}

fn check(
    field: &'static str,
    value: f64,
    allowed: impl std::ops::RangeBounds<f64>,
    range: &'static str,
) -> Result<(), InvalidMazeConfig> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(InvalidMazeConfig {
            field,
            value,
            range,
        })
    }
}

impl MazeConfig {
    /// Check every probability. `random_backtrack` must stay below 1 or the
    /// carver would never pop its stack.
    pub fn validate(&self) -> Result<(), InvalidMazeConfig> {
        check("randomPick", self.random_pick, 0.0..=1.0, "[0, 1]")?;
        check("randomBacktrack", self.random_backtrack, 0.0..1.0, "[0, 1)")?;
        check("extraOpenings", self.extra_openings, 0.0..=1.0, "[0, 1]")
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            random_pick: 0.75,
            random_backtrack: 0.4,
            extra_openings: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(MazeConfig::default().validate(), Ok(()));
        let edges = MazeConfig {
            random_pick: 1.0,
            random_backtrack: 0.0,
            extra_openings: 1.0,
        };
        assert_eq!(edges.validate(), Ok(()));
    }

    #[test]
    fn out_of_range_probabilities_are_rejected() {
        let always_jump = MazeConfig {
            random_backtrack: 1.0,
            ..MazeConfig::default()
        };
        let err = always_jump.validate().unwrap_err();
        assert_eq!(err.field, "randomBacktrack");
        assert!(err.to_string().contains("[0, 1)"));

        for bad in [f64::NAN, f64::INFINITY, -0.5, 1e9] {
            let cfg = MazeConfig {
                extra_openings: bad,
                ..MazeConfig::default()
            };
            assert_eq!(cfg.validate().unwrap_err().field, "extraOpenings", "{bad}");
        }
        let cfg = MazeConfig {
            random_pick: f64::NAN,
            ..MazeConfig::default()
        };
        assert_eq!(cfg.validate().unwrap_err().field, "randomPick");
    }
}
