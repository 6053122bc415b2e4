use log::info;
use std::path::{Path, PathBuf};

use crate::config::{self, UserConfig};
use crate::display;
use crate::error::{GcloneError, Result};
use crate::prompt::Prompt;

/// Interactively update and save the configuration
pub fn run(config_path: &Path, prompt: &mut dyn Prompt) -> Result<UserConfig> {
    let current = config::load(config_path)?;

    let username_question = if current.is_configured() {
        format!(
            "Enter your default GitHub username (press Enter to keep '{}')",
            current.default_username
        )
    } else {
        "Enter your default GitHub username".to_string()
    };
    let username = prompt.ask(&username_question)?;

    let tmp_question = format!(
        "Enter your temporary directory path (press Enter for default '{}')",
        current.tmp_directory.display()
    );
    let tmp_directory = prompt.ask(&tmp_question)?;

    let updated = apply_answers(current, &username, &tmp_directory)?;
    config::save(&updated, config_path)?;
    info!("Saved configuration to {}", config_path.display());

    display::print_success("Configuration saved successfully!");
    Ok(updated)
}

/// Merge prompt answers into `config`; blank answers keep the existing value.
///
/// Fails if the resulting username would leave gclone unusable.
pub fn apply_answers(
    mut config: UserConfig,
    username: &str,
    tmp_directory: &str,
) -> Result<UserConfig> {
    if !username.is_empty() {
        config.default_username = username.to_string();
    }
    if !tmp_directory.is_empty() {
        config.tmp_directory = PathBuf::from(tmp_directory);
    }

    if !config.is_configured() {
        return Err(GcloneError::Config(
            "default username cannot be empty".to_string(),
        ));
    }
    if config
        .default_username
        .chars()
        .any(|c| c == '/' || c.is_whitespace())
    {
        return Err(GcloneError::Config(format!(
            "invalid default username '{}'",
            config.default_username
        )));
    }

    Ok(config)
}
