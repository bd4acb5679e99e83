//! Application service — inventory generation.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::{ClusterView, Diagnostics, LocalFs, NodeView};
use crate::domain::error::SetupError;
use crate::domain::inventory::{HostFacts, build_document};
use crate::domain::settings::ProviderSettings;

/// Build the inventory for `cluster` and write it to storage.
///
/// Returns `None` when no node matched a configured group: there is nothing
/// to configure, which is not an error. Otherwise the inventory file is
/// (re)written and its path returned.
///
/// # Errors
///
/// Returns an error if the storage directory is gone and cannot be
/// recreated, or if the file cannot be written.
pub fn build_inventory<C: ClusterView>(
    cluster: &C,
    settings: &ProviderSettings,
    fs: &impl LocalFs,
    diag: &impl Diagnostics,
) -> Result<Option<PathBuf>> {
    let doc = build_document(
        cluster.nodes().iter().map(|node| HostFacts {
            kind: node.kind(),
            name: node.name(),
            address: node.preferred_address(),
            login_user: node.login_user(),
        }),
        &settings.groups,
        &settings.environment,
    );

    if doc.is_empty() {
        diag.info("No inventory file was created.");
        return Ok(None);
    }

    let storage = &settings.storage;
    if !fs.exists(&storage.path) {
        // A sibling cleanup may have reclaimed a shared temporary directory.
        diag.warn(&format!(
            "Storage directory `{}` is missing, recreating it",
            storage.path.display()
        ));
        fs.create_dir_all(&storage.path)
            .map_err(|e| SetupError::StorageDirectory {
                path: storage.path.clone(),
                reason: format!("{e:#}"),
            })?;
    }
    if storage.ephemeral {
        diag.debug(&format!(
            "Writing inventory file to tmp dir `{}`",
            storage.path.display()
        ));
    }

    let path = storage.inventory_path(cluster.name());
    fs.write(&path, &doc.render())
        .with_context(|| format!("writing inventory for cluster `{}`", cluster.name()))?;
    diag.debug(&format!("Inventory written to {}", path.display()));

    Ok(Some(path))
}
