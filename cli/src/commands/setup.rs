//! `ansible-setup setup <cluster>` — configure a cluster.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::SetupProvider;
use crate::commands::PlaybookFailed;
use crate::infra::cluster::load_cluster;
use crate::output::json::format_result;

/// Arguments for the setup command.
#[derive(Args)]
pub struct SetupArgs {
    /// Cluster description (YAML)
    pub cluster: PathBuf,

    /// Leave the generated inventory in place after the run
    #[arg(long)]
    pub keep_inventory: bool,
}

/// Run `ansible-setup setup`.
///
/// # Errors
///
/// Returns an error on configuration problems, or [`PlaybookFailed`] when
/// the playbook run did not succeed.
pub async fn run(app: &AppContext, args: &SetupArgs) -> Result<()> {
    let cluster = load_cluster(&args.cluster)?;
    let config = app.load_config()?;
    let provider = app.provider(&config)?;

    app.output
        .info(&format!("Configuring cluster `{}` ...", cluster.name));
    let outcome = provider.setup_cluster(&cluster).await;

    let kept = if args.keep_inventory {
        let path = provider.settings().storage.inventory_path(&cluster.name);
        path.exists().then_some(path)
    } else {
        provider.cleanup(&cluster);
        None
    };
    provider.release_storage();

    if !outcome? {
        return Err(PlaybookFailed(cluster.name).into());
    }

    if app.is_json() {
        println!("{}", format_result(&cluster.name, true, kept.as_deref())?);
    } else {
        app.output
            .success(&format!("Cluster `{}` configured", cluster.name));
        if let Some(path) = &kept {
            app.output.kv("Inventory", &path.display().to_string());
        }
    }
    Ok(())
}
