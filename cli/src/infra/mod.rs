//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, filesystem
//! access, environment lookup, configuration and cluster loading.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod cluster;
pub mod command_runner;
pub mod config;
pub mod diagnostics;
pub mod fs;
pub mod host;
pub mod provider;
