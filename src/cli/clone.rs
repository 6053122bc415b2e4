use log::debug;
use std::path::Path;

use crate::clone::{self, CloneOptions, Runner};
use crate::config;
use crate::error::{GcloneError, Result};

/// Clone `repository` after checking gclone is configured
pub fn run(
    repository: Option<&str>,
    options: CloneOptions,
    config_path: &Path,
    cwd: &Path,
    runner: &dyn Runner,
) -> Result<()> {
    let config = config::load(config_path)?;

    if !config.is_configured() {
        return Err(GcloneError::NotConfigured);
    }

    let repository = repository.ok_or(GcloneError::MissingRepository)?;

    let plan = clone::plan(repository, &config, &options, cwd)?;
    debug!("Clone plan: {:?}", plan);

    clone::execute(&plan, &options, runner)
}
