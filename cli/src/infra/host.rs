//! Infrastructure implementation of the `HostEnvironment` port.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::HostEnvironment;

/// Prefix assumed when the executable location cannot be determined.
pub const FALLBACK_PREFIX: &str = "/usr/local";

/// Reads the real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl HostEnvironment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn vars(&self) -> BTreeMap<OsString, OsString> {
        std::env::vars_os().collect()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn current_dir(&self) -> Result<PathBuf> {
        std::env::current_dir().context("cannot determine current directory")
    }

    /// `<prefix>/bin/ansible-setup` → `<prefix>`.
    fn install_prefix(&self) -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent()?.parent().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_PREFIX))
    }
}
