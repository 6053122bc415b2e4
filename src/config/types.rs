use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory name appended to the platform temp dir for `-tmp` clones
const TMP_DIR_NAME: &str = "gclone";

/// gclone user configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Owner prepended to bare repository names (empty means unconfigured)
    pub default_username: String,

    /// Parent directory for clones made with `-tmp`
    pub tmp_directory: PathBuf,
}

impl UserConfig {
    pub fn is_configured(&self) -> bool {
        !self.default_username.is_empty()
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            default_username: String::new(),
            tmp_directory: default_tmp_directory(),
        }
    }
}

/// Platform temp directory with a gclone subdirectory
pub fn default_tmp_directory() -> PathBuf {
    std::env::temp_dir().join(TMP_DIR_NAME)
}
