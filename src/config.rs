use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::records::Thresholds;
use crate::table::DEFAULT_PAGE_SIZE;

pub const DEFAULT_CONFIG_PATH: &str = ".rotaview.toml";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/run-main";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
    #[serde(default)]
    pub thresholds: Thresholds,
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at '{}'", path))?;
        if config.thresholds.low > config.thresholds.high {
            anyhow::bail!(
                "thresholds.low ({}) must not exceed thresholds.high ({})",
                config.thresholds.low,
                config.thresholds.high
            );
        }
        Ok(config)
    }

    /// Like `from_file`, but a missing file means defaults.
    pub fn load_or_default(path: &str) -> anyhow::Result<Self> {
        if !Path::new(path).exists() {
            tracing::debug!(path, "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

/// Write a config with every default spelled out, unless one already exists.
/// Returns false when the file was left alone.
pub fn init_config(path: &str) -> anyhow::Result<bool> {
    if Path::new(path).exists() {
        return Ok(false);
    }

    let config = Config {
        endpoint: Some(DEFAULT_ENDPOINT.to_string()),
        page_size: Some(DEFAULT_PAGE_SIZE),
        thresholds: Thresholds::default(),
    };
    config
        .save(path)
        .with_context(|| format!("Failed to write config to '{}'", path))?;
    Ok(true)
}
