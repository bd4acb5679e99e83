//! Domain types and validators for provider configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::collections::BTreeMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Config schema ────────────────────────────────────────────────────────────

/// Provider configuration as written by the operator, usually in
/// `~/.ansible-setup/config.yaml`.
///
/// Every optional field carries its default here, so configuration written
/// before a field existed still loads. Unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Node kind → Ansible groups the node is placed in.
    #[serde(default)]
    pub groups: BTreeMap<String, Vec<String>>,

    /// Playbook to run. Defaults to the playbook shipped under the install prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playbook_path: Option<String>,

    /// Node kind → extra inventory variables for nodes of that kind.
    #[serde(default)]
    pub environment_vars: BTreeMap<String, BTreeMap<String, String>>,

    /// Directory holding inventory files. A temporary directory is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<String>,

    /// Force every play to escalate privileges.
    #[serde(default = "default_true")]
    pub sudo: bool,

    /// Escalation target user.
    #[serde(default = "default_sudo_user")]
    pub sudo_user: String,

    /// Extra module directories, comma- or colon-separated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ansible_module_dir: Option<String>,

    /// Enable SSH pipelining (connection multiplexing).
    #[serde(default = "default_true")]
    pub ssh_pipelining: bool,

    /// Parallel fork count handed to Ansible.
    #[serde(default = "default_forks")]
    pub forks: u32,

    /// SSH connection timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            groups: BTreeMap::new(),
            playbook_path: None,
            environment_vars: BTreeMap::new(),
            storage_path: None,
            sudo: default_true(),
            sudo_user: default_sudo_user(),
            ansible_module_dir: None,
            ssh_pipelining: default_true(),
            forks: default_forks(),
            timeout: default_timeout(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_sudo_user() -> String {
    "root".to_string()
}

fn default_forks() -> u32 {
    10
}

fn default_timeout() -> u32 {
    120
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a loaded configuration.
///
/// # Errors
///
/// Returns a [`ConfigError::InvalidValue`] naming the first offending key.
pub fn validate_provider_config(config: &ProviderConfig) -> Result<()> {
    if config.forks == 0 {
        return Err(invalid("forks", "0", "must be at least 1"));
    }
    if config.timeout == 0 {
        return Err(invalid("timeout", "0", "must be at least 1"));
    }
    if config.sudo && config.sudo_user.trim().is_empty() {
        return Err(invalid(
            "sudo_user",
            &config.sudo_user,
            "must be set when sudo is enabled",
        ));
    }
    for (kind, groups) in &config.groups {
        for group in groups {
            validate_group_name(kind, group)?;
        }
    }
    Ok(())
}

fn validate_group_name(kind: &str, group: &str) -> Result<()> {
    let bad = group.is_empty()
        || group.chars().any(|c| c.is_whitespace() || c == '[' || c == ']');
    if bad {
        return Err(invalid(
            &format!("groups.{kind}"),
            group,
            "group names must be non-empty without whitespace or brackets",
        ));
    }
    Ok(())
}

fn invalid(key: &str, value: &str, reason: &str) -> anyhow::Error {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

// ── Unit tests ───────────────────────────────────────────────────────────────
