//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::level_filters::LevelFilter;

use crate::app::{AppContext, AppFlags, OutputFlags};
use crate::commands;

/// Configure clusters with Ansible playbooks
#[derive(Parser)]
#[command(
    name = "ansible-setup",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Provider configuration file [default: ~/.ansible-setup/config.yaml]
    #[arg(short, long, global = true, env = "ANSIBLE_SETUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (repeatable); also raises ansible-playbook verbosity
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output (also honoured: any `NO_COLOR` value)
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the inventory and run the playbook against a cluster
    Setup(commands::setup::SetupArgs),

    /// Build the inventory only and show where it was written
    Inventory(commands::ClusterArgs),

    /// Remove a cluster's inventory from persistent storage
    Cleanup(commands::ClusterArgs),
}

impl Cli {
    /// Log level selected by `-v`/`-q`.
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Execute the CLI command.
    ///
    /// `log_level` is the level the tracing subscriber actually enables,
    /// which may differ from [`Cli::log_level`] when `RUST_LOG` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self, log_level: LevelFilter) -> Result<()> {
        let Cli {
            config,
            quiet,
            json,
            no_color,
            command,
            ..
        } = self;
        let app = AppContext::new(AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            config,
            log_level,
        });
        match command {
            Command::Setup(args) => commands::setup::run(&app, &args).await,
            Command::Inventory(args) => commands::inventory::run(&app, &args),
            Command::Cleanup(args) => commands::cleanup::run(&app, &args),
        }
    }
}
