//! Structured JSON logging with a level that can be changed per invocation.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{Registry, reload};

use crate::core::config::LogLevel;

/// Handle to the process-wide level filter installed by [`setup_logging`].
#[derive(Clone)]
pub struct LogControl {
    handle: reload::Handle<LevelFilter, Registry>,
}

impl LogControl {
    /// Swaps the active level. Fails only if the subscriber this handle
    /// belongs to was never installed or has been dropped.
    pub fn apply(&self, level: LogLevel) -> Result<(), reload::Error> {
        self.handle.reload(level.as_filter())
    }

    #[must_use]
    pub fn current(&self) -> Option<LevelFilter> {
        self.handle.clone_current()
    }
}

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Installs a tracing-subscriber JSON formatter suitable for `CloudWatch` Logs
/// behind a reloadable level filter that starts at `INFO`. Call it once at
/// cold start; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// use imagegen::core::config::LogLevel;
///
/// let log_control = imagegen::setup_logging();
/// let _ = log_control.apply(LogLevel::Debug);
/// ```
pub fn setup_logging() -> LogControl {
    let (filter, handle) = reload::Layer::new(LevelFilter::INFO);
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();

    LogControl { handle }
}
