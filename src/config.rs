use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::card::CardConfig;
use crate::notify::NotifyConfig;
use crate::utils::paths::get_config_path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub card: CardConfig,

    #[serde(default)]
    pub notify: NotifyConfig,

    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardConfig {
    /// Linux only: keep serving the clipboard this long after a copy. The
    /// contents are lost when the process exits unless a clipboard manager
    /// has taken them over by then.
    #[serde(default = "default_hold_ms")]
    pub hold_ms: u64,
}

fn default_hold_ms() -> u64 {
    30_000
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            hold_ms: default_hold_ms(),
        }
    }
}

impl ClipboardConfig {
    pub fn hold(&self) -> Option<Duration> {
        (self.hold_ms > 0).then(|| Duration::from_millis(self.hold_ms))
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;

        Ok(config)
    }
}
