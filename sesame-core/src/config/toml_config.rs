//! TOML configuration file I/O
//!
//! Handles loading and saving the vault configuration to/from TOML
//! files in the user's configuration directory. A missing file is not
//! an error; the defaults make the tool usable out of the box.

use crate::config::SesameConfig;
use crate::error::{ConfigError, SesameError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Get the default configuration directory
///
/// Returns ~/.config/sesame, or SESAME_CONFIG_DIR if set (used by
/// tests to redirect config I/O).
pub fn get_config_dir() -> Result<PathBuf, SesameError> {
    if let Ok(config_dir) = std::env::var("SESAME_CONFIG_DIR") {
        return Ok(PathBuf::from(config_dir));
    }

    let home = std::env::var("HOME").map_err(|_| {
        SesameError::Config(ConfigError::IoError {
            message: "HOME environment variable not set".to_string(),
        })
    })?;

    Ok(PathBuf::from(home).join(".config").join("sesame"))
}

/// Get the default configuration file path
pub fn get_config_path() -> Result<PathBuf, SesameError> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the configuration from the default TOML file
///
/// Falls back to defaults when no file exists.
pub fn load_config() -> Result<SesameConfig, SesameError> {
    let config_path = get_config_path()?;
    load_config_from_path(&config_path)
}

/// Load the configuration from a specific TOML file
pub fn load_config_from_path<P: AsRef<Path>>(path: P) -> Result<SesameConfig, SesameError> {
    if !path.as_ref().exists() {
        debug!(path = %path.as_ref().display(), "no config file, using defaults");
        return Ok(SesameConfig::default());
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| {
        SesameError::Config(ConfigError::IoError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    let config: SesameConfig = toml::from_str(&contents).map_err(|e| {
        SesameError::Config(ConfigError::LoadFailed {
            path: format!("{}: {}", path.as_ref().display(), e),
        })
    })?;

    config
        .validate()
        .map_err(|e| SesameError::Config(ConfigError::ValidationError { message: e }))?;

    Ok(config)
}

/// Save the configuration to the default TOML file
pub fn save_config(config: &SesameConfig) -> Result<(), SesameError> {
    let config_path = get_config_path()?;
    save_config_to_path(config, &config_path)
}

/// Save the configuration to a specific TOML file
pub fn save_config_to_path<P: AsRef<Path>>(
    config: &SesameConfig,
    path: P,
) -> Result<(), SesameError> {
    config
        .validate()
        .map_err(|e| SesameError::Config(ConfigError::ValidationError { message: e }))?;

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            SesameError::Config(ConfigError::IoError {
                message: format!("Failed to create config directory: {}", e),
            })
        })?;
    }

    let contents = toml::to_string_pretty(config)?;

    std::fs::write(&path, contents).map_err(|_| {
        SesameError::Config(ConfigError::SaveFailed {
            path: path.as_ref().to_string_lossy().to_string(),
        })
    })?;

    Ok(())
}

/// Check if a configuration file exists
pub fn config_exists() -> Result<bool, SesameError> {
    Ok(get_config_path()?.exists())
}
