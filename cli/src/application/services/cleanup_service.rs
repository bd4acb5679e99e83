//! Application service — inventory cleanup use-case.

use std::path::Path;

use crate::application::ports::{ClusterView, Diagnostics, LocalFs};
use crate::domain::settings::ProviderSettings;

/// Delete the inventory generated for `cluster`.
///
/// Best-effort and idempotent: a missing storage directory or inventory is
/// already clean, and removal errors are logged, never returned. An
/// ephemeral storage directory is removed only once it is empty, so clusters
/// sharing it keep their inventories.
pub fn cleanup_cluster<C: ClusterView>(
    cluster: &C,
    settings: &ProviderSettings,
    fs: &impl LocalFs,
    diag: &impl Diagnostics,
) {
    let storage = &settings.storage;

    // 1. Storage already gone
    if !fs.exists(&storage.path) {
        return;
    }

    // 2. Nothing generated for this cluster
    let inventory = storage.inventory_path(cluster.name());
    if !fs.exists(&inventory) {
        return;
    }

    // 3. Remove the inventory
    if let Err(e) = fs.remove_file(&inventory) {
        diag.warn(&format!(
            "Ignoring error while deleting inventory file {}: {e:#}",
            inventory.display()
        ));
    }

    // 4. Reclaim temporary storage once the last inventory is gone
    if storage.ephemeral {
        reclaim_if_empty(&storage.path, fs, diag);
    }
}

/// Remove the provider's temporary storage directory if nothing is left in it.
///
/// Called by the process that owns the per-run temporary storage once it is
/// done with the provider: a run that wrote no inventory (nothing matched, or
/// setup failed early) would otherwise leave an empty directory behind.
/// Persistent storage and directories still holding files are kept.
pub fn release_storage(settings: &ProviderSettings, fs: &impl LocalFs, diag: &impl Diagnostics) {
    let storage = &settings.storage;
    if storage.ephemeral && fs.exists(&storage.path) {
        reclaim_if_empty(&storage.path, fs, diag);
    }
}

fn reclaim_if_empty(dir: &Path, fs: &impl LocalFs, diag: &impl Diagnostics) {
    match fs.is_empty_dir(dir) {
        Ok(true) => match fs.remove_dir(dir) {
            Ok(()) => diag.debug(&format!("Removed temporary storage {}", dir.display())),
            // Lost a race with a sibling cleanup or setup; either way nothing is lost.
            Err(e) => diag.debug(&format!(
                "Ignoring error while removing {}: {e:#}",
                dir.display()
            )),
        },
        Ok(false) => diag.debug(&format!(
            "Keeping {}: it still holds other inventories",
            dir.display()
        )),
        Err(e) => diag.debug(&format!(
            "Ignoring error while listing {}: {e:#}",
            dir.display()
        )),
    }
}
