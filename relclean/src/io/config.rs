//! Tool configuration stored in `relclean.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// relclean configuration (TOML).
///
/// This file is intended to be edited by humans and must remain stable and
/// automatable. Missing fields default to the values the original build
/// scripts hardcoded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToolConfig {
    /// Filename suffix identifying development-only config files in publish
    /// output (e.g. `appsettings.dev.json`).
    pub dev_suffix: String,

    /// Output directory used by `relclean ship`, relative to the working
    /// directory.
    pub ship_output_dir: String,

    pub publish: PublishConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PublishConfig {
    /// Publish tool to execute (e.g. `["dotnet", "publish"]`). The project,
    /// no-rebuild flag, configuration, and output directory are appended.
    pub command: Vec<String>,

    /// Wall-clock budget for the publish subprocess in seconds.
    pub timeout_secs: u64,

    /// Truncate captured publish stdout/stderr beyond this many bytes.
    pub output_limit_bytes: usize,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            dev_suffix: ".dev.json".to_string(),
            ship_output_dir: "../extensions/vscode/bin".to_string(),
            publish: PublishConfig::default(),
        }
    }
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            command: vec!["dotnet".to_string(), "publish".to_string()],
            timeout_secs: 10 * 60,
            output_limit_bytes: 100_000,
        }
    }
}

impl ToolConfig {
    pub fn validate(&self) -> Result<()> {
        if self.dev_suffix.is_empty() {
            return Err(anyhow!("dev_suffix must be non-empty"));
        }
        if self.ship_output_dir.trim().is_empty() {
            return Err(anyhow!("ship_output_dir must be non-empty"));
        }
        if self.publish.timeout_secs == 0 {
            return Err(anyhow!("publish.timeout_secs must be > 0"));
        }
        if self.publish.output_limit_bytes == 0 {
            return Err(anyhow!("publish.output_limit_bytes must be > 0"));
        }
        if self.publish.command.is_empty() || self.publish.command[0].trim().is_empty() {
            return Err(anyhow!("publish.command must be a non-empty array"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ToolConfig::default()`.
pub fn load_config(path: &Path) -> Result<ToolConfig> {
    if !path.exists() {
        let cfg = ToolConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ToolConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
