use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::style;

struct XeLogger {
    filter: LevelFilter,
}

impl Log for XeLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let marker = marker(record.level());
        let message = if record.level() >= Level::Debug {
            style::paint(style::DIM, &format!("{} — {}", record.target(), record.args()))
        } else {
            record.args().to_string()
        };
        let _ = writeln!(std::io::stderr().lock(), "{marker} {message}");
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn marker(level: Level) -> String {
    match level {
        Level::Error => style::paint(style::ERROR, "✘"),
        Level::Warn => style::paint(style::WARN, "!"),
        Level::Info => style::paint(style::ACCENT, "❱"),
        Level::Debug | Level::Trace => style::paint(style::DIM, "·"),
    }
}

/// Resolve the level filter: `RUST_LOG` wins, then `-v`/`-q`, then `Info`.
#[must_use]
pub fn level_filter(verbose: bool, quiet: bool) -> LevelFilter {
    resolve_level(std::env::var("RUST_LOG").ok().as_deref(), verbose, quiet)
}

fn resolve_level(rust_log: Option<&str>, verbose: bool, quiet: bool) -> LevelFilter {
    if let Some(filter) = rust_log.and_then(|s| s.parse().ok()) {
        return filter;
    }
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Initialize the global logger. Must be called once before any logging.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init(filter: LevelFilter) {
    let logger = XeLogger { filter };
    log::set_boxed_logger(Box::new(logger)).expect("logger already initialized");
    log::set_max_level(filter);
}
