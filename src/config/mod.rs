//! Configuration module
//!
//! Handles locating, loading and saving `~/.gclone/config.json`.
//! Defines the UserConfig type.

mod types;

pub use types::UserConfig;

use crate::error::{GcloneError, Result};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".gclone";
const CONFIG_FILE: &str = "config.json";

/// Config file location under the given home directory
pub fn config_path(home: &Path) -> PathBuf {
    home.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Resolve the config file location for the current user
pub fn locate() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(GcloneError::HomeDir)?;
    let path = config_path(&home);
    debug!("Using config file {}", path.display());
    Ok(path)
}

/// Load configuration from a JSON file, returning defaults if it does not exist
pub fn load(path: &Path) -> Result<UserConfig> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No config at {}, using defaults", path.display());
            return Ok(UserConfig::default());
        }
        Err(e) => return Err(e.into()),
    };

    serde_json::from_str(&content).map_err(|source| GcloneError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Save configuration to a JSON file, overwriting any previous content
pub fn save(config: &UserConfig, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| GcloneError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, json)?;
    debug!("Wrote config to {}", path.display());
    Ok(())
}
