//! `TracingDiagnostics` — `tracing`-backed implementation of the `Diagnostics` port.

use tracing::level_filters::LevelFilter;

use crate::application::ports::Diagnostics;

/// Forwards diagnostics to the installed `tracing` subscriber.
///
/// The level reported by [`Diagnostics::max_level`] is the one the subscriber
/// was configured with, so the child tool's verbosity follows the CLI's.
#[derive(Debug, Clone, Copy)]
pub struct TracingDiagnostics {
    level: LevelFilter,
}

impl TracingDiagnostics {
    #[must_use]
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Diagnostics for TracingDiagnostics {
    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }

    fn max_level(&self) -> LevelFilter {
        self.level
    }
}
