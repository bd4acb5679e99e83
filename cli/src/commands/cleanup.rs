//! `ansible-setup cleanup <cluster>` — remove a cluster's inventory.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::SetupProvider;
use crate::commands::ClusterArgs;
use crate::domain::error::ConfigError;
use crate::infra::cluster::load_cluster;
use crate::output::json::format_result;

/// Run `ansible-setup cleanup`.
///
/// Only meaningful with a persistent `storage_path`: temporary storage lives
/// for a single process and is already cleaned by `setup`.
///
/// # Errors
///
/// Returns an error if the configuration or cluster is invalid. Removal
/// failures are logged, not returned.
pub fn run(app: &AppContext, args: &ClusterArgs) -> Result<()> {
    let cluster = load_cluster(&args.cluster)?;
    let config = app.load_config()?;
    if config.storage_path.is_none() {
        return Err(ConfigError::InvalidValue {
            key: "storage_path".to_string(),
            value: String::new(),
            reason: "cleanup needs a persistent storage_path; temporary inventories are removed by setup".to_string(),
        }
        .into());
    }
    let provider = app.provider(&config)?;

    provider.cleanup(&cluster);

    if app.is_json() {
        println!("{}", format_result(&cluster.name, true, None)?);
    } else {
        app.output
            .success(&format!("Inventory for cluster `{}` removed", cluster.name));
    }
    Ok(())
}
