//! Validation of cluster descriptions before they are handed to a setup provider.

use std::collections::HashSet;

use thiserror::Error;

use crate::types::Cluster;

/// Reasons a cluster description is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClusterError {
    #[error("Invalid cluster name '{0}': must be non-empty and usable as a file name suffix")]
    InvalidName(String),

    #[error("Duplicate node name '{0}' in cluster")]
    DuplicateNode(String),

    #[error("Node #{index} has an empty '{field}' field")]
    EmptyField { index: usize, field: &'static str },
}

/// Validates that a cluster name can be appended to a file name.
///
/// Rejects empty names, `.` and `..`, path separators and NUL bytes.
pub fn validate_cluster_name(name: &str) -> Result<(), ClusterError> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if bad {
        return Err(ClusterError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Validates a whole cluster: its name, unique node names, and required node fields.
pub fn validate_cluster(cluster: &Cluster) -> Result<(), ClusterError> {
    validate_cluster_name(&cluster.name)?;

    let mut seen = HashSet::new();
    for (index, node) in cluster.nodes.iter().enumerate() {
        for (field, value) in [
            ("name", &node.name),
            ("kind", &node.kind),
            ("image_user", &node.image_user),
        ] {
            if value.trim().is_empty() {
                return Err(ClusterError::EmptyField { index, field });
            }
        }
        if !seen.insert(node.name.as_str()) {
            return Err(ClusterError::DuplicateNode(node.name.clone()));
        }
    }
    Ok(())
}
