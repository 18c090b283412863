//! Minimal stderr backend for the `log` facade.

use std::str::FromStr;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Environment variable overriding the `-v` level, e.g. `PATHMAZE_LOG=debug`.
pub const ENV_VAR: &str = "PATHMAZE_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Pick a level: a parseable `env` value wins, otherwise each `-v` raises
/// the level one step from `warn`.
pub fn level(verbose: u8, env: Option<&str>) -> LevelFilter {
    if let Some(lvl) = env.and_then(|s| LevelFilter::from_str(s.trim()).ok()) {
        return lvl;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. Fails if a logger is already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
