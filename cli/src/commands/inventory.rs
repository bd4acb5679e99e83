//! `ansible-setup inventory <cluster>` — build the inventory without running Ansible.

use anyhow::{Context, Result};

use crate::app::AppContext;
use crate::commands::ClusterArgs;
use crate::infra::cluster::load_cluster;
use crate::output::json::format_result;

/// Run `ansible-setup inventory`.
///
/// # Errors
///
/// Returns an error if the configuration or cluster is invalid, or the
/// inventory cannot be written.
pub fn run(app: &AppContext, args: &ClusterArgs) -> Result<()> {
    let cluster = load_cluster(&args.cluster)?;
    let config = app.load_config()?;
    let provider = app.provider(&config)?;

    let inventory = provider.build_inventory(&cluster);
    // A written inventory keeps its directory; an empty one is ours to drop.
    provider.release_storage();
    let inventory = inventory?;

    if app.is_json() {
        println!(
            "{}",
            format_result(&cluster.name, true, inventory.as_deref())?
        );
        return Ok(());
    }

    match inventory {
        None => app.output.info(&format!(
            "No node of cluster `{}` matches a configured group; nothing to write.",
            cluster.name
        )),
        Some(path) => {
            app.output.kv("Inventory", &path.display().to_string());
            if !app.output.quiet {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                print!("{content}");
            }
        }
    }
    Ok(())
}
