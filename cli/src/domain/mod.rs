//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod inventory;
pub mod invocation;
pub mod paths;
pub mod settings;

pub use config::{ProviderConfig, validate_provider_config};
pub use error::{ConfigError, SetupError};
pub use inventory::{HostEntry, HostFacts, InventoryDocument, build_document};
pub use settings::{ProviderSettings, StorageLocation};
