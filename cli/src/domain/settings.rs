//! Resolved provider settings.
//!
//! Produced once from a [`ProviderConfig`](crate::domain::config::ProviderConfig)
//! by the path resolver; never re-derived afterwards.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::paths::inventory_file_name;

/// Directory holding the generated inventory files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocation {
    /// Absolute directory path.
    pub path: PathBuf,
    /// `true` when the directory was created by the provider and should be
    /// reclaimed once it holds no more inventories.
    pub ephemeral: bool,
}

impl StorageLocation {
    /// A caller-supplied directory that is never removed.
    #[must_use]
    pub fn persistent(path: PathBuf) -> Self {
        Self {
            path,
            ephemeral: false,
        }
    }

    /// A provider-created directory, removed when it becomes empty.
    #[must_use]
    pub fn ephemeral(path: PathBuf) -> Self {
        Self {
            path,
            ephemeral: true,
        }
    }

    /// Path of the inventory file for the given cluster.
    #[must_use]
    pub fn inventory_path(&self, cluster_name: &str) -> PathBuf {
        self.path.join(inventory_file_name(cluster_name))
    }
}

/// Everything the inventory builder, invocation engine and cleanup need.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    /// Node kind → Ansible groups.
    pub groups: BTreeMap<String, Vec<String>>,
    /// Node kind → extra host variables.
    pub environment: BTreeMap<String, BTreeMap<String, String>>,
    /// Expanded playbook path (not yet canonicalized).
    pub playbook: PathBuf,
    pub storage: StorageLocation,
    /// Extra module directories, in configured order.
    pub module_dirs: Vec<String>,
    /// Escalation target user; `None` disables `--sudo`.
    pub sudo_user: Option<String>,
    pub ssh_pipelining: bool,
    pub forks: u32,
    pub timeout: u32,
}

impl ProviderSettings {
    /// Playbook path as configured (after expansion).
    #[must_use]
    pub fn playbook(&self) -> &Path {
        &self.playbook
    }
}
