//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use anyhow::Result;
use tracing::level_filters::LevelFilter;

use crate::domain::config::ProviderConfig;

// ── Cluster Collaborator ──────────────────────────────────────────────────────

/// Read-only view of one cluster node.
pub trait NodeView {
    /// Node kind (role), matched against the configured groups.
    fn kind(&self) -> &str;
    /// Node name, unique within the cluster.
    fn name(&self) -> &str;
    /// Address the node is reached on, `None` when not yet assigned.
    fn preferred_address(&self) -> Option<&str>;
    /// Remote login user.
    fn login_user(&self) -> &str;
}

/// Read-only view of a cluster, owned and mutated elsewhere.
pub trait ClusterView {
    type Node: NodeView;

    /// Cluster name, safe to use as a file name suffix.
    fn name(&self) -> &str;
    /// Private key used to log into every node.
    fn private_key_file(&self) -> &Path;
    /// All nodes, in cluster order.
    fn nodes(&self) -> &[Self::Node];
}

// ── Setup Provider ────────────────────────────────────────────────────────────

/// Contract offered to cluster lifecycle code.
#[allow(async_fn_in_trait)]
pub trait SetupProvider {
    /// Configure the cluster. Safe to call repeatedly.
    ///
    /// Returns `Ok(true)` on success (including when there is nothing to do)
    /// and `Ok(false)` when the configuration run failed.
    ///
    /// # Errors
    ///
    /// Returns an error for configuration problems: missing playbook, missing
    /// inventory, or a storage directory that cannot be created.
    async fn setup_cluster<C: ClusterView>(&self, cluster: &C) -> Result<bool>;

    /// Remove the artifacts generated for the cluster. Never fails.
    fn cleanup<C: ClusterView>(&self, cluster: &C);
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run `program` with exactly the environment `env`, inheriting stdout and
    /// stderr, and wait for it to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on.
    async fn run_status(
        &self,
        program: &str,
        args: &[String],
        env: &BTreeMap<OsString, OsString>,
    ) -> Result<ExitStatus>;
}

// ── Diagnostics Port ──────────────────────────────────────────────────────────

/// Injected logging capability. Sync trait — no async needed.
pub trait Diagnostics {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    /// Most verbose level currently enabled.
    fn max_level(&self) -> LevelFilter;
}

// ── Host Environment Port ─────────────────────────────────────────────────────

/// Process-level facts: environment variables and well-known directories.
pub trait HostEnvironment {
    /// Value of one environment variable.
    fn var(&self, key: &str) -> Option<String>;
    /// Snapshot of the whole environment, the base of every child environment.
    /// Values are kept as raw OS strings, including ones that are not UTF-8.
    fn vars(&self) -> BTreeMap<OsString, OsString>;
    /// Current user's home directory.
    fn home_dir(&self) -> Option<PathBuf>;
    /// Current working directory, used to absolutize relative paths.
    fn current_dir(&self) -> Result<PathBuf>;
    /// Installation prefix, e.g. `/usr/local`.
    fn install_prefix(&self) -> PathBuf;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Abstracts the filesystem operations the provider performs.
pub trait LocalFs {
    fn exists(&self, path: &Path) -> bool;
    fn is_file(&self, path: &Path) -> bool;
    /// `true` when `path` is a directory with no entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be listed.
    fn is_empty_dir(&self, path: &Path) -> Result<bool>;
    /// Create `path` and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns an error if any component cannot be created.
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    /// Create a new, uniquely named directory that outlives this call.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    fn create_temp_dir(&self) -> Result<PathBuf>;
    /// Replace the contents of `path`; readers never see a partial file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write(&self, path: &Path, content: &str) -> Result<()>;
    /// Resolve symlinks and relative components.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist.
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;
    /// # Errors
    ///
    /// Returns an error if the file cannot be removed.
    fn remove_file(&self, path: &Path) -> Result<()>;
    /// Remove an empty directory; fails if it is not empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory is not empty or cannot be removed.
    fn remove_dir(&self, path: &Path) -> Result<()>;
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts where provider configuration is loaded from.
pub trait ConfigStore {
    /// Load and parse the provider configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or malformed.
    fn load(&self) -> Result<ProviderConfig>;

    /// Location the configuration is read from.
    ///
    /// # Errors
    ///
    /// Returns an error if no location can be determined.
    fn path(&self) -> Result<PathBuf>;
}
