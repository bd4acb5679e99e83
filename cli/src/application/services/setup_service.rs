//! Application service — running `ansible-playbook` against a cluster.

use anyhow::Result;

use crate::application::ports::{ClusterView, CommandRunner, Diagnostics, HostEnvironment, LocalFs};
use crate::application::services::inventory_service::build_inventory;
use crate::domain::error::SetupError;
use crate::domain::invocation::{
    ANSIBLE_PLAYBOOK, ansible_env_overrides, ansible_verbosity, merge_environment, playbook_args,
};
use crate::domain::settings::ProviderSettings;

/// Configure `cluster` by running the playbook over a freshly built inventory.
///
/// Blocks until `ansible-playbook` exits; its output goes straight to the
/// caller's terminal.
///
/// Outcomes:
/// - `Ok(true)`: the playbook succeeded, or no node needed configuring.
/// - `Ok(false)`: the playbook exited non-zero (or was killed). Re-running is safe.
/// - `Err(_)`: configuration error (see [`SetupError`]) or the binary
///   could not be started.
///
/// # Errors
///
/// See above.
pub async fn setup_cluster<C: ClusterView>(
    cluster: &C,
    settings: &ProviderSettings,
    fs: &impl LocalFs,
    host: &impl HostEnvironment,
    runner: &impl CommandRunner,
    diag: &impl Diagnostics,
) -> Result<bool> {
    let Some(inventory) = build_inventory(cluster, settings, fs, diag)? else {
        diag.info("No setup required for this cluster.");
        return Ok(true);
    };

    if !fs.exists(&inventory) {
        return Err(SetupError::InventoryMissing(inventory).into());
    }
    let playbook = settings.playbook();
    if !fs.exists(playbook) {
        return Err(SetupError::PlaybookMissing(playbook.to_path_buf()).into());
    }
    if !fs.is_file(playbook) {
        return Err(SetupError::PlaybookNotAFile(playbook.to_path_buf()).into());
    }
    let playbook = fs.canonicalize(playbook)?;
    diag.debug(&format!("Using playbook file {}.", playbook.display()));

    let overrides = ansible_env_overrides(settings, cluster.private_key_file());
    diag.debug("Calling `ansible-playbook` with the following environment overrides:");
    for (var, value) in &overrides {
        diag.debug(&format!("- {var}={value}"));
    }
    let env = merge_environment(host.vars(), &overrides);

    let verbosity = ansible_verbosity(diag.max_level());
    let args = playbook_args(
        &playbook,
        &inventory,
        settings.sudo_user.as_deref(),
        verbosity,
    );
    diag.debug(&format!(
        "Running Ansible command `{ANSIBLE_PLAYBOOK} {}` ...",
        args.join(" ")
    ));

    let status = runner.run_status(ANSIBLE_PLAYBOOK, &args, &env).await?;
    if status.success() {
        diag.info("Cluster correctly configured.");
        return Ok(true);
    }

    match status.code() {
        Some(code) => diag.error(&format!(
            "Command `{ANSIBLE_PLAYBOOK}` failed with exit code {code}."
        )),
        None => diag.error(&format!(
            "Command `{ANSIBLE_PLAYBOOK}` was terminated by a signal."
        )),
    }
    diag.error("Check the output lines above for additional information on this error.");
    diag.error(
        "The cluster has likely *not* been configured correctly. \
         You may need to re-run setup or fix the playbooks.",
    );
    Ok(false)
}
