//! Configuration loading for the TalentLens CLI.
//! Reads talentlens.toml from the current directory or the path in TALENTLENS_CONFIG.

use serde::{Deserialize, Serialize};
use std::path::Path;
use talentlens_common::EngineConfig;

pub const CONFIG_ENV: &str = "TALENTLENS_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "talentlens.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Reject requests that fail structural validation instead of scoring them.
    #[serde(default = "default_strict")]
    pub strict: bool,
}

fn default_pretty() -> bool { true }
fn default_strict() -> bool { false }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            strict: default_strict(),
        }
    }
}

impl Config {
    /// Path from TALENTLENS_CONFIG, else talentlens.toml.
    pub fn resolve_path() -> String {
        std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
    }

    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Self::resolve_path())
    }

    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.engine.validate()?;
        Ok(config)
    }
}
