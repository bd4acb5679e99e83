//! Filesystem infrastructure — implements the `LocalFs` port.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::LocalFs;

/// Prefix of provider-created temporary storage directories.
pub const TEMP_DIR_PREFIX: &str = "ansible-setup-";

/// Production filesystem implementation of `LocalFs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostFs;

impl LocalFs for HostFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_empty_dir(&self, path: &Path) -> Result<bool> {
        let mut entries = std::fs::read_dir(path)
            .with_context(|| format!("listing directory {}", path.display()))?;
        Ok(entries.next().is_none())
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("creating directory {}", path.display()))
    }

    fn create_temp_dir(&self) -> Result<PathBuf> {
        let dir = tempfile::Builder::new()
            .prefix(TEMP_DIR_PREFIX)
            .tempdir()
            .context("creating temporary directory")?;
        Ok(dir.keep())
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        // Atomic write via temp file in the same directory then rename.
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("{} has no parent directory", path.display()))?;
        let mut temp = tempfile::NamedTempFile::new_in(parent)
            .with_context(|| format!("creating temp file in {}", parent.display()))?;
        temp.write_all(content.as_bytes())
            .with_context(|| format!("writing temp file for {}", path.display()))?;
        temp.persist(path)
            .with_context(|| format!("finalizing file {}", path.display()))?;
        Ok(())
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        std::fs::canonicalize(path).with_context(|| format!("resolving {}", path.display()))
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        std::fs::remove_file(path).with_context(|| format!("removing file {}", path.display()))
    }

    fn remove_dir(&self, path: &Path) -> Result<()> {
        std::fs::remove_dir(path)
            .with_context(|| format!("removing directory {}", path.display()))
    }
}
