//! Command implementations

pub mod cleanup;
pub mod inventory;
pub mod setup;

use std::path::PathBuf;

use clap::Args;
use thiserror::Error;

/// Arguments for commands operating on one cluster description.
#[derive(Args)]
pub struct ClusterArgs {
    /// Cluster description (YAML)
    pub cluster: PathBuf,
}

/// The playbook ran but did not succeed. Re-running `setup` is safe.
#[derive(Debug, Error)]
#[error("ansible-playbook did not configure cluster `{0}`; fix the problem above and re-run setup")]
pub struct PlaybookFailed(pub String);
