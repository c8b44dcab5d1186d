//   ____ _       _               ____
//  / ___(_)_ __ | |__   ___ _ __/ ___| ___ _ __
// | |   | | '_ \| '_ \ / _ \ '__| |  _ / _ \ '_ \
// | |___| | |_) | | | |  __/ |  | |_| |  __/ | | |
//  \____|_| .__/|_| |_|\___|_|   \____|\___|_| |_|
//         |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// Config Tools

use std::fs;
use std::path::{Path, PathBuf};

use dirs::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::passgen::{CharacterClassSelection, DEFAULT_LENGTH, clamp_length};

const CONFIG_FILE: &str = "config.json";
const DEFAULT_CLEAR_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Config directory error: {0}")]
    ConfigDirError(String),
}

/// Front-end defaults. The generator and scorer never read this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub length: usize,
    pub classes: CharacterClassSelection,
    /// Seconds before a copied password is wiped from the clipboard. 0 keeps it.
    pub clipboard_clear_secs: u64,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: CharacterClassSelection::all(),
            clipboard_clear_secs: DEFAULT_CLEAR_SECS,
        }
    }
}

impl ConfigFile {
    /// Reads the config at `path`, falling back to defaults when it is absent.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&data)?;
        let clamped = clamp_length(config.length);
        if clamped != config.length {
            tracing::warn!(
                requested = config.length,
                clamped,
                "configured length out of range"
            );
            config.length = clamped;
        }
        Ok(config)
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        tracing::info!(path = %path.display(), "config saved");
        Ok(())
    }
}

pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    match config_dir() {
        Some(path) => Ok(path.join("ciphergen")),
        None => Err(ConfigError::ConfigDirError(
            "Could not determine configuration directory".to_string(),
        )),
    }
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_config_dir()?.join(CONFIG_FILE))
}
