#![cfg(feature = "std")]

use std::env;
use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level (`off`, `error`, ..., `trace`).
pub const LOG_ENV: &str = "TODDLER_GAMES_LOG";

/// Writes `LEVEL [target] message` lines to stderr, keeping stdout for game
/// text and JSON output.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `value`, falling back to `info` when missing or unparsable.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level found in [`LOG_ENV`]. Calling it
/// again after a logger is installed has no effect.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
