#![cfg(feature = "std")]

use std::env;
use std::io::Write;
use log::{self, LevelFilter, Metadata, Record};

/// Environment variable that overrides the log level (`error` … `trace`).
pub const LOG_ENV: &str = "SEA_BATTLE_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // stdout belongs to the game itself
            let _ = writeln!(
                std::io::stderr(),
                "{} [{}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level name, falling back to `default` when missing or invalid.
pub fn level_from(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(default)
}

/// Initialize logging with a level taken from the `SEA_BATTLE_LOG`
/// environment variable, or `default` if unset or invalid. Calling it
/// again only adjusts the level.
pub fn init_logging(default: LevelFilter) {
    let var = env::var(LOG_ENV).ok();
    let level = level_from(var.as_deref(), default);
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
