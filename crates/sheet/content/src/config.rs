//! System configuration loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{LoadResult, read_file};

/// Host-facing system configuration registered at init time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Dice formula the host uses to roll initiative.
    pub initiative: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            initiative: "@attributes.Perception.value".to_owned(),
        }
    }
}

/// Loader for system configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing SystemConfig
    ///
    /// # Returns
    ///
    /// Returns a SystemConfig.
    pub fn load(path: &Path) -> LoadResult<SystemConfig> {
        let content = read_file(path)?;
        let config: SystemConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
