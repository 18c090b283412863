use pathmaze_gen::InvalidMazeConfig;
use pathmaze_paths::UnknownAlgorithm;

/// Errors reported to callers as a rejected request.
///
/// An unreachable end node is not an error: searches finish normally and the
/// run reports that the end was not reached.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid maze size {rows}x{cols}: both dimensions must be positive")]
    InvalidSize { rows: i32, cols: i32 },
    #[error(transparent)]
    InvalidConfig(#[from] InvalidMazeConfig),
    #[error(transparent)]
    UnknownAlgorithm(#[from] UnknownAlgorithm),
    #[error("invalid boolean flag {0:?} (expected true, false, 1 or 0)")]
    InvalidFlag(String),
}

pub type Result<T> = std::result::Result<T, Error>;
