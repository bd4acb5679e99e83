//! JSON output helpers.
//!
//! Every `--json` code path prints exactly one object: a result object on
//! success, or the error object when a command fails.

use std::path::Path;

use anyhow::{Context, Result};
use cluster_common::ClusterError;

use crate::commands::PlaybookFailed;
use crate::domain::error::{ConfigError, SetupError};

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Format the result of a command run against one cluster.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_result(cluster: &str, success: bool, inventory: Option<&Path>) -> Result<String> {
    let obj = serde_json::json!({
        "cluster": cluster,
        "success": success,
        "inventory": inventory.map(|p| p.display().to_string()),
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Stable machine-readable code for an error chain.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if err.downcast_ref::<PlaybookFailed>().is_some() {
        "playbook_failed"
    } else if err.downcast_ref::<SetupError>().is_some() {
        "setup_configuration"
    } else if err.downcast_ref::<ConfigError>().is_some() {
        "invalid_config"
    } else if err.downcast_ref::<ClusterError>().is_some() {
        "invalid_cluster"
    } else {
        "error"
    }
}
