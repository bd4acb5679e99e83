//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator, so callers can classify failures with
//! `anyhow::Error::downcast_ref`.

use std::path::PathBuf;

use thiserror::Error;

// ── Setup errors ──────────────────────────────────────────────────────────────

/// Configuration problems detected while preparing or running a setup.
///
/// These are fatal: they are raised to the caller and never retried.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("inventory file `{}` could not be found", .0.display())]
    InventoryMissing(PathBuf),

    #[error("playbook `{}` could not be found", .0.display())]
    PlaybookMissing(PathBuf),

    #[error("playbook `{}` is not a file", .0.display())]
    PlaybookNotAFile(PathBuf),

    #[error("cannot create storage directory `{}`: {reason}", .path.display())]
    StorageDirectory { path: PathBuf, reason: String },

    #[error("cannot create temporary storage directory: {reason}")]
    TemporaryStorage { reason: String },
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to loading and validating provider configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Cannot read configuration {}: {reason}", .path.display())]
    Unreadable { path: PathBuf, reason: String },
}
