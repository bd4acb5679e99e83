use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A cluster as described on disk: a name, the private key used to reach
/// every node, and the nodes in provisioning order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cluster {
    /// Cluster name. Also used as the suffix of generated artifact filenames.
    pub name: String,
    /// Private SSH key shared by all nodes of the cluster.
    pub user_key_private: PathBuf,
    /// Nodes in the order they were started.
    #[serde(default)]
    pub nodes: Vec<Node>,
}

/// A single cluster node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    /// Unique node name within the cluster, e.g. `frontend001`.
    pub name: String,
    /// Node kind (role), e.g. `frontend` or `compute`.
    pub kind: String,
    /// Address the node should be reached on. Unset while the node has no IP yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_ip: Option<String>,
    /// Login user on the node image, e.g. `ubuntu`.
    pub image_user: String,
}
