//! Infrastructure implementation of the `ConfigStore` port.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::config::ProviderConfig;
use crate::domain::error::ConfigError;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "ANSIBLE_SETUP_CONFIG";

/// Production implementation of `ConfigStore` that reads a YAML file on disk.
///
/// Location precedence: explicit path, then `$ANSIBLE_SETUP_CONFIG`, then
/// `~/.ansible-setup/config.yaml`.
#[derive(Debug, Default, Clone)]
pub struct YamlConfigStore {
    explicit: Option<PathBuf>,
}

impl YamlConfigStore {
    #[must_use]
    pub fn new(explicit: Option<PathBuf>) -> Self {
        Self { explicit }
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<ProviderConfig> {
        let path = self.path()?;
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Unreadable {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
    }

    fn path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.explicit {
            return Ok(path.clone());
        }
        if let Ok(val) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(val));
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(home.join(".ansible-setup").join("config.yaml"))
    }
}
