#![cfg(feature = "std")]

use log::{self, LevelFilter, Metadata, Record};
use std::env;

const CRATE: &str = "salvo";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && accepts_target(metadata.target())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[{:<5} {}] {}",
                record.level(),
                short_target(record.target()),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Whether records from `target` belong to the game rather than a dependency.
pub fn accepts_target(target: &str) -> bool {
    target == CRATE
        || target
            .strip_prefix(CRATE)
            .is_some_and(|rest| rest.starts_with("::"))
}

/// Module part of a game target: `salvo::board` becomes `board`.
pub fn short_target(target: &str) -> &str {
    target
        .strip_prefix(CRATE)
        .and_then(|rest| rest.strip_prefix("::"))
        .unwrap_or(target)
}

/// Parse a level name such as `debug`; unknown names yield `None`.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}

/// Install the stderr logger, level taken from `SALVO_LOG`.
/// Defaults to `warn` so log lines do not interleave with the board.
pub fn init_logging() {
    let level = env::var("SALVO_LOG")
        .ok()
        .and_then(|lvl| parse_level(&lvl))
        .unwrap_or(LevelFilter::Warn);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
