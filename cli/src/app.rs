//! Application context — unified state passed to every command handler.
//!
//! `AppContext` is constructed once in `Cli::run()`. Adding a cross-cutting
//! concern requires only one field change here; no command signature changes.

use std::path::PathBuf;

use anyhow::Result;
use tracing::level_filters::LevelFilter;

use crate::application::ports::ConfigStore;
use crate::domain::config::ProviderConfig;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::infra::diagnostics::TracingDiagnostics;
use crate::infra::provider::AnsibleSetupProvider;
use crate::output::OutputContext;

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Explicit configuration file, if given.
    pub config: Option<PathBuf>,
    /// Level the tracing subscriber was installed with.
    pub log_level: LevelFilter,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Where provider configuration is read from.
    pub config_store: YamlConfigStore,
    /// Level handed to provider diagnostics (drives `ansible-playbook -v`).
    pub log_level: LevelFilter,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: AppFlags) -> Self {
        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet || flags.output.json),
            mode,
            config_store: YamlConfigStore::new(flags.config),
            log_level: flags.log_level,
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Load the provider configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is missing or malformed.
    pub fn load_config(&self) -> Result<ProviderConfig> {
        self.config_store.load()
    }

    /// Build the production provider for `config`.
    ///
    /// In JSON mode the playbook's own output is routed to stderr so stdout
    /// carries only the result object.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the storage
    /// directory cannot be created.
    pub fn provider(&self, config: &ProviderConfig) -> Result<AnsibleSetupProvider> {
        AnsibleSetupProvider::new(
            config,
            TokioCommandRunner::new().stdout_to_stderr(self.is_json()),
            TracingDiagnostics::new(self.log_level),
        )
    }
}
