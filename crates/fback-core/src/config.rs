use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::expand::DEFAULT_WARN_THRESHOLD;

/// Words used for `$word` when no wordlist file is given.
pub const DEFAULT_WORDS: &[&str] = &[
    "web",
    "fullbackup",
    "backup",
    "data",
    "site",
    "assets",
    "logs",
    "debug",
    "install",
];

/// Global configuration loaded from `~/.config/fback/config.toml`.
/// Command-line flags take precedence over every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FbackConfig {
    /// Template file used when `-p` is not given (None = `res/patterns.json`).
    #[serde(default)]
    pub patterns_path: Option<PathBuf>,
    /// Upper bound `n` of the `$num` values `1..=n`.
    #[serde(default = "default_number_count")]
    pub number_count: usize,
    /// Words used when `-w` is not given.
    #[serde(default = "default_wordlist")]
    pub wordlist: Vec<String>,
    /// Candidate count per pass above which a warning is logged.
    #[serde(default = "default_warn_threshold")]
    pub expansion_warn_threshold: usize,
}

fn default_number_count() -> usize {
    3
}

fn default_wordlist() -> Vec<String> {
    DEFAULT_WORDS.iter().map(|w| w.to_string()).collect()
}

fn default_warn_threshold() -> usize {
    DEFAULT_WARN_THRESHOLD
}

impl Default for FbackConfig {
    fn default() -> Self {
        Self {
            patterns_path: None,
            number_count: default_number_count(),
            wordlist: default_wordlist(),
            expansion_warn_threshold: default_warn_threshold(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fback")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FbackConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FbackConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit file (`--config`).
pub fn load_from_path(path: &Path) -> Result<FbackConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FbackConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
