//! Application service — path resolution at provider construction time.

use anyhow::Result;

use crate::application::ports::{HostEnvironment, LocalFs};
use crate::domain::config::{ProviderConfig, validate_provider_config};
use crate::domain::error::SetupError;
use crate::domain::paths::{default_playbook_path, expand_path, split_module_dirs};
use crate::domain::settings::{ProviderSettings, StorageLocation};

/// Turn an operator configuration into resolved settings.
///
/// - The playbook path is user- and variable-expanded, or defaults to the
///   playbook bundled under the install prefix.
/// - A configured storage path is expanded and created if missing; it is
///   never removed by cleanup.
/// - Without a storage path, a fresh temporary directory is created and
///   marked ephemeral.
///
/// # Errors
///
/// Returns a [`ConfigError`](crate::domain::error::ConfigError) for invalid
/// values and a [`SetupError`] when the storage directory cannot be created.
pub fn resolve_settings(
    config: &ProviderConfig,
    host: &impl HostEnvironment,
    fs: &impl LocalFs,
) -> Result<ProviderSettings> {
    validate_provider_config(config)?;

    let home = host.home_dir();
    let cwd = host.current_dir()?;
    let expand = |raw: &str| expand_path(raw, home.as_deref(), &cwd, |key: &str| host.var(key));

    let playbook = match non_blank(config.playbook_path.as_deref()) {
        Some(raw) => expand(raw),
        None => default_playbook_path(&host.install_prefix()),
    };

    let storage = match non_blank(config.storage_path.as_deref()) {
        Some(raw) => {
            let path = expand(raw);
            if !fs.exists(&path) {
                fs.create_dir_all(&path)
                    .map_err(|e| SetupError::StorageDirectory {
                        path: path.clone(),
                        reason: format!("{e:#}"),
                    })?;
            }
            StorageLocation::persistent(path)
        }
        None => {
            let path = fs
                .create_temp_dir()
                .map_err(|e| SetupError::TemporaryStorage {
                    reason: format!("{e:#}"),
                })?;
            StorageLocation::ephemeral(path)
        }
    };

    Ok(ProviderSettings {
        groups: config.groups.clone(),
        environment: config.environment_vars.clone(),
        playbook,
        storage,
        module_dirs: split_module_dirs(config.ansible_module_dir.as_deref()),
        sudo_user: config.sudo.then(|| config.sudo_user.clone()),
        ssh_pipelining: config.ssh_pipelining,
        forks: config.forks,
        timeout: config.timeout,
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
