//! Configuration management.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// CLI configuration.
///
/// Holds the identity obtained by `register` so later runs can
/// authenticate without another round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Client identifier assigned by Gracenote.
    pub client_id: Option<String>,

    /// Client tag appended to the client identifier.
    pub client_tag: Option<String>,

    /// User identifier returned by registration.
    pub user_id: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Get the default config file path.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("net", "cddbp", "gracenote")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Set a value by key name as used by `config set`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "client_id" => self.client_id = Some(value.to_string()),
            "client_tag" | "tag" => self.client_tag = Some(value.to_string()),
            "user_id" => self.user_id = Some(value.to_string()),
            "timeout_secs" | "timeout" => self.timeout_secs = Some(value.parse()?),
            "output_format" | "output" => self.output_format = Some(value.parse()?),
            _ => anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 client_id      - Client identifier assigned by Gracenote\n  \
                 client_tag     - Client tag\n  \
                 user_id        - User identifier from registration\n  \
                 timeout_secs   - Request timeout in seconds\n  \
                 output_format  - Default output format (pretty/json)",
                key
            ),
        }

        Ok(())
    }
}
