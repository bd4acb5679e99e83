//! Application services — use-case orchestration.
//!
//! Each service module implements a single use-case by composing domain logic
//! with port trait calls. Services import only from `crate::domain` and
//! `crate::application::ports` — never from `crate::infra`, `crate::commands`,
//! or `crate::output`.

pub mod cleanup_service;
pub mod inventory_service;
pub mod resolve;
pub mod setup_service;

pub use cleanup_service::{cleanup_cluster, release_storage};
pub use inventory_service::build_inventory;
pub use resolve::resolve_settings;
pub use setup_service::setup_cluster;
