//! Config persistence and path resolution methods for `Config`.
//!
//! Covers:
//! - `load` / `save` (YAML file I/O with atomic write)
//! - XDG-compliant path helpers (`config_path`, `config_dir`, `state_dir`)

use super::config_struct::Config;
use crate::error::ConfigError;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    /// Load configuration from the default location or create it
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, creating a default one if missing
    pub fn load_from(config_path: &Path) -> Result<Self> {
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            log::info!("Loading existing config from {:?}", config_path);

            let contents = fs::read_to_string(config_path)
                .map_err(ConfigError::from)
                .with_context(|| format!("Failed to read config from {:?}", config_path))?;

            if contents.trim().is_empty() {
                log::warn!("Config file {:?} is empty, using defaults", config_path);
                return Ok(Self::default());
            }

            let config: Config = serde_yaml_ng::from_str(&contents)
                .map_err(ConfigError::from)
                .with_context(|| format!("Failed to parse config from {:?}", config_path))?;
            config.validate()?;
            Ok(config)
        } else {
            log::info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            if let Err(e) = config.save_to(config_path) {
                log::error!("Failed to save default config: {}", e);
                return Err(e);
            }
            log::info!("Default config created successfully");
            Ok(config)
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let yaml = serde_yaml_ng::to_string(self).context("Failed to serialize config")?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = config_path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)
            .with_context(|| format!("Failed to write config to {:?}", temp_path))?;
        fs::rename(&temp_path, config_path)
            .with_context(|| format!("Failed to move config into place at {:?}", config_path))?;

        Ok(())
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("repo-shell")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("repo-shell")
            } else {
                PathBuf::from(".")
            }
        }
    }

    /// Directory holding the persisted session record, resolving `~` if present
    pub fn state_dir(&self) -> PathBuf {
        match self.state_directory.as_deref() {
            Some(dir) if dir.starts_with("~/") => match dirs::home_dir() {
                Some(home) => home.join(&dir[2..]),
                None => PathBuf::from(dir),
            },
            Some(dir) => PathBuf::from(dir),
            None => Self::config_dir().join("state"),
        }
    }
}
