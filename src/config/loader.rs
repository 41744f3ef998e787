//! Configuration loading and persistence
//!
//! The store never fails a load: a missing, unreadable, or unparseable
//! config file yields fresh defaults, and a partial document is seeded with
//! defaults for every missing key by serde. Only saving can surface errors.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use super::template::generate_defaults;
use super::types::ConfigOptions;
use crate::error::ConfigError;

/// Default location of the config file (~/.notemark/config.json)
pub fn config_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".notemark").join("config.json"))
        .unwrap_or_else(|| std::env::temp_dir().join("notemark-config.json"))
}

/// Load the configuration from `path`, falling back to fresh defaults on
/// any failure. Invalid free-form values in an otherwise valid document are
/// reset to their defaults and logged.
#[instrument(name = "load_config", skip_all)]
pub fn load_config(path: &Path) -> ConfigOptions {
    if !path.exists() {
        info!(path = %path.display(), "Config file not found, generating defaults");
        return generate_defaults();
    }

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read config file, generating defaults");
            return generate_defaults();
        }
    };

    let mut config = match serde_json::from_str::<ConfigOptions>(&raw) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to parse config file, generating defaults");
            return generate_defaults();
        }
    };

    for repair in config.heal() {
        warn!(repair = %repair, "Repaired invalid config value");
    }

    info!(path = %path.display(), version = %config.version, "Loaded configuration");
    config
}

/// Persist the configuration as pretty-printed JSON, creating parent
/// directories as needed.
pub fn save_config(path: &Path, config: &ConfigOptions) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), "Saved configuration");
    Ok(())
}
