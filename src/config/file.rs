//! Configuration file loading
//!
//! Handles loading and saving the router configuration as TOML.

use crate::config::RouterConfigFile;
use crate::error::{ConfigError, Result};

use std::path::{Path, PathBuf};

/// Configuration file handler
pub struct ConfigFile;

impl ConfigFile {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<RouterConfigFile> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;

        let config: RouterConfigFile =
            toml::from_str(&content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save<P: AsRef<Path>>(config: &RouterConfigFile, path: P) -> Result<()> {
        let content = toml::to_string_pretty(config)
            .map_err(|e| ConfigError::ParseError(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path.as_ref(), content)?;

        Ok(())
    }

    /// Load configuration from default locations
    pub fn load_default() -> Option<RouterConfigFile> {
        for path in Self::default_paths() {
            if path.exists() {
                if let Ok(config) = Self::load(&path) {
                    log::info!("Loaded config from {}", path.display());
                    return Some(config);
                }
            }
        }
        None
    }

    /// Get default configuration file paths
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // System-wide config
        paths.push(PathBuf::from("/etc/alertctl/config.toml"));

        // User config
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("alertctl").join("config.toml"));
        }

        // Current directory
        paths.push(PathBuf::from("alertctl.toml"));
        paths.push(PathBuf::from(".alertctl.toml"));

        paths
    }
}
