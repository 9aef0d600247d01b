//! Diagnostic logging.
//!
//! The menu owns stdout, so every `tracing` event is written to stderr.
//! Registry mutations log at debug, refused reservations at warn.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// How chatty the diagnostics are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only (`-q`).
    Quiet,
    /// Warnings, such as a reservation refused on a full flight.
    #[default]
    Normal,
    /// Every reservation and cancellation (`-v`).
    Verbose,
    /// Lookups that found nothing as well (`-vv`).
    Trace,
}

impl Verbosity {
    /// Pick a level from the `-v` count and the `-q` switch; quiet wins.
    #[must_use]
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Trace,
        }
    }

    /// The most detailed level let through.
    #[must_use]
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Filter directive scoped to this crate, e.g. `airres=debug`.
    #[must_use]
    pub fn directive(&self) -> String {
        format!(
            "{}={}",
            env!("CARGO_CRATE_NAME"),
            self.to_level_filter().to_string().to_lowercase()
        )
    }
}

/// Install the stderr subscriber.
///
/// A `RUST_LOG` value, when present and parseable, replaces the directive
/// derived from `verbosity`. Later calls are no-ops.
///
/// ```no_run
/// use airres::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::from_flags(1, false));
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .without_time(),
        )
        .try_init();
}

/// Capture every crate event in the test harness output.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(Verbosity::Trace.directive())
        .with_test_writer()
        .try_init();
}
