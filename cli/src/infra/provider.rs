//! Infrastructure adapter implementing the `SetupProvider` port with Ansible.
//!
//! `AnsibleSetupProvider` owns the resolved settings and the port
//! implementations the setup and cleanup services run against.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::application::ports::{
    ClusterView, CommandRunner, Diagnostics, HostEnvironment, LocalFs, SetupProvider,
};
use crate::application::services::{
    build_inventory, cleanup_cluster, release_storage, resolve_settings, setup_cluster,
};
use crate::domain::config::ProviderConfig;
use crate::domain::settings::ProviderSettings;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::diagnostics::TracingDiagnostics;
use crate::infra::fs::HostFs;
use crate::infra::host::ProcessEnvironment;

/// Configures clusters by running `ansible-playbook` over a generated inventory.
///
/// Generic over every port so tests can inject recording mocks without
/// spawning real processes. Holds no mutable state: one instance may serve
/// several clusters, including concurrent cleanups.
pub struct AnsibleSetupProvider<
    R: CommandRunner = TokioCommandRunner,
    F: LocalFs = HostFs,
    H: HostEnvironment = ProcessEnvironment,
    D: Diagnostics = TracingDiagnostics,
> {
    settings: ProviderSettings,
    runner: R,
    fs: F,
    host: H,
    diag: D,
}

impl<R, F, H, D> AnsibleSetupProvider<R, F, H, D>
where
    R: CommandRunner,
    F: LocalFs,
    H: HostEnvironment,
    D: Diagnostics,
{
    /// Resolve `config` against the given ports.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the storage
    /// directory cannot be created.
    pub fn with_parts(config: &ProviderConfig, runner: R, fs: F, host: H, diag: D) -> Result<Self> {
        let settings = resolve_settings(config, &host, &fs)?;
        Ok(Self {
            settings,
            runner,
            fs,
            host,
            diag,
        })
    }

    /// Resolved settings in use.
    #[must_use]
    pub fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    /// Directory inventories are written to.
    #[must_use]
    pub fn storage_path(&self) -> &Path {
        &self.settings.storage.path
    }

    /// Build (or rebuild) the cluster's inventory without running the playbook.
    ///
    /// # Errors
    ///
    /// Returns an error if the inventory cannot be written.
    pub fn build_inventory<C: ClusterView>(&self, cluster: &C) -> Result<Option<PathBuf>> {
        build_inventory(cluster, &self.settings, &self.fs, &self.diag)
    }

    /// Remove the temporary storage directory created for this provider if it
    /// holds no inventory. Persistent storage is never touched.
    pub fn release_storage(&self) {
        release_storage(&self.settings, &self.fs, &self.diag);
    }
}

impl AnsibleSetupProvider {
    /// Convenience constructor for production use.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the storage
    /// directory cannot be created.
    pub fn new(
        config: &ProviderConfig,
        runner: TokioCommandRunner,
        diag: TracingDiagnostics,
    ) -> Result<Self> {
        Self::with_parts(config, runner, HostFs, ProcessEnvironment, diag)
    }
}

impl<R, F, H, D> SetupProvider for AnsibleSetupProvider<R, F, H, D>
where
    R: CommandRunner,
    F: LocalFs,
    H: HostEnvironment,
    D: Diagnostics,
{
    async fn setup_cluster<C: ClusterView>(&self, cluster: &C) -> Result<bool> {
        setup_cluster(
            cluster,
            &self.settings,
            &self.fs,
            &self.host,
            &self.runner,
            &self.diag,
        )
        .await
    }

    fn cleanup<C: ClusterView>(&self, cluster: &C) {
        cleanup_cluster(cluster, &self.settings, &self.fs, &self.diag);
    }
}
