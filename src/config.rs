use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::PrereleaseConfig;
use crate::error::{BumpError, Result};

/// Represents the complete configuration for bump.
///
/// Contains pre-release seeding settings, the remote to inspect, and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default)]
    pub prerelease: PrereleaseConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Returns the default remote used to detect the GitHub repository.
fn default_remote() -> String {
    "origin".to_string()
}

/// Configuration for behavior customization.
///
/// Controls what gets offered and whether the browser is opened; does not affect version rules.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub include_initial_prereleases: bool,

    #[serde(default)]
    pub no_open: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: default_remote(),
            prerelease: PrereleaseConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `bump.toml` in current directory
/// 3. `.bump.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read, parsed, or names an invalid initial pre-release
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./bump.toml").exists() {
        fs::read_to_string("./bump.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".bump.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(config_str).map_err(|e| BumpError::config(e.to_string()))?;
    config.prerelease.validate()?;
    Ok(config)
}
