//! Cluster descriptions: YAML loading and the `ClusterView` adapter for
//! `cluster_common` types.

use std::path::Path;

use anyhow::{Context, Result};
use cluster_common::{Cluster, Node, validate_cluster};

use crate::application::ports::{ClusterView, NodeView};

impl NodeView for Node {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn preferred_address(&self) -> Option<&str> {
        self.preferred_ip.as_deref()
    }

    fn login_user(&self) -> &str {
        &self.image_user
    }
}

impl ClusterView for Cluster {
    type Node = Node;

    fn name(&self) -> &str {
        &self.name
    }

    fn private_key_file(&self) -> &Path {
        &self.user_key_private
    }

    fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

/// Read and validate a cluster description.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or the cluster is invalid.
pub fn load_cluster(path: &Path) -> Result<Cluster> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read cluster file {}", path.display()))?;
    let cluster: Cluster = serde_yaml::from_str(&content)
        .with_context(|| format!("cannot parse cluster file {}", path.display()))?;
    validate_cluster(&cluster)
        .with_context(|| format!("invalid cluster file {}", path.display()))?;
    Ok(cluster)
}
