pub mod types;
pub mod validate;

pub use types::{Cluster, Node};
pub use validate::{ClusterError, validate_cluster, validate_cluster_name};
