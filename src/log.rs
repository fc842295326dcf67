//! The `log` module defines the crate's logging facade. It (re)exports the
//! five logging macros `error!`, `warn!`, `info!`, `debug!` and `trace!`,
//! where `error!` is the highest-priority level and `trace!` the lowest.
//!
//! Logging is _disabled_ by default. Messages are enabled/disabled with:
//!
//!  - `enable_logging()`: turns on all log messages
//!  - `disable_logging()`: turns off all log messages
//!  - `set_log_level(level: LevelFilter)`: enables only messages with
//!    priority at least `level`
//!
//! Output goes to stdout through a `log4rs` console appender.

pub use log::{LevelFilter, debug, error, info, trace, warn};
use log4rs::Handle;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use std::sync::OnceLock;

// Logging disabled until a caller opts in.
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Off;

/// Handle to the installed logger. The global logger can only be installed
/// once per process; subsequent level changes go through this handle.
static LOG_HANDLE: OnceLock<Handle> = OnceLock::new();

fn console_config(level: LevelFilter) -> Config {
    let stdout = ConsoleAppender::builder().build();
    Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .unwrap() // A single console appender with a matching root cannot fail validation.
}

/// Enables the logger with no level filter / full logging. Equivalent to
/// `set_log_level(LevelFilter::Trace)`.
pub fn enable_logging() {
    set_log_level(LevelFilter::Trace);
}

/// Disables logging completely. Equivalent to `set_log_level(LevelFilter::Off)`.
pub fn disable_logging() {
    set_log_level(DEFAULT_LOG_LEVEL);
}

/// Sets the global log level, installing the logger on first use. A level of
/// `LevelFilter::Off` disables logging.
pub fn set_log_level(level: LevelFilter) {
    match LOG_HANDLE.get() {
        Some(handle) => handle.set_config(console_config(level)),
        None => {
            // Lost race or a logger installed by the host application; either
            // way the existing logger stays in place.
            if let Ok(handle) = log4rs::init_config(console_config(level)) {
                let _ = LOG_HANDLE.set(handle);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_level_is_idempotent() {
        set_log_level(LevelFilter::Info);
        set_log_level(LevelFilter::Info);
        trace!("not emitted at info level");
        info!("emitted at info level");
        disable_logging();
    }
}
