//! Clone orchestration
//!
//! Turns a repository argument into a GitHub URL and target directory,
//! runs `git clone` and optionally opens the result in VSCode.

mod repository;
mod runner;

pub use repository::{directory_name, repository_url, resolve_name};
#[cfg(test)]
pub use runner::fake;
pub use runner::{RunStatus, Runner, SystemRunner};

use crate::config::UserConfig;
use crate::display;
use crate::error::{GcloneError, Result};
use log::info;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

const GIT_PROGRAM: &str = "git";

#[cfg(windows)]
const EDITOR_PROGRAM: &str = "code.cmd";
#[cfg(not(windows))]
const EDITOR_PROGRAM: &str = "code";

/// Flags controlling a clone
#[derive(Debug, Clone, Copy, Default)]
pub struct CloneOptions {
    /// Open the clone in VSCode afterwards
    pub open_in_editor: bool,

    /// Clone under the configured temp directory instead of the working directory
    pub use_tmp_dir: bool,
}

/// Everything needed to run a clone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClonePlan {
    pub url: String,
    /// Directory git runs in
    pub parent_dir: PathBuf,
    /// Directory git is expected to create
    pub target_dir: PathBuf,
}

/// Work out URL and directories without touching the filesystem
pub fn plan(
    repository: &str,
    config: &UserConfig,
    options: &CloneOptions,
    cwd: &Path,
) -> Result<ClonePlan> {
    let full_name = resolve_name(repository, &config.default_username)?;

    let parent_dir = if options.use_tmp_dir {
        if config.tmp_directory.as_os_str().is_empty() {
            return Err(GcloneError::Config(
                "tmp_directory is empty. Run 'gclone -config' to set it.".to_string(),
            ));
        }
        config.tmp_directory.clone()
    } else {
        cwd.to_path_buf()
    };

    let target_dir = parent_dir.join(directory_name(&full_name));

    Ok(ClonePlan {
        url: repository_url(&full_name),
        parent_dir,
        target_dir,
    })
}

/// Run the clone, then the editor if requested
pub fn execute(plan: &ClonePlan, options: &CloneOptions, runner: &dyn Runner) -> Result<()> {
    if options.use_tmp_dir {
        fs::create_dir_all(&plan.parent_dir).map_err(|source| GcloneError::CreateDir {
            path: plan.parent_dir.clone(),
            source,
        })?;
    }

    display::print_status(&format!("Cloning {}...", plan.url));
    info!("Cloning into {}", plan.parent_dir.display());

    let clone_args = [OsStr::new("clone"), OsStr::new(&plan.url)];
    let outcome = runner.run(GIT_PROGRAM, &clone_args, Some(&plan.parent_dir));
    check(outcome).map_err(|reason| GcloneError::CloneFailed {
        url: plan.url.clone(),
        reason,
    })?;

    if options.open_in_editor {
        let outcome = runner.run(EDITOR_PROGRAM, &[plan.target_dir.as_os_str()], None);
        check(outcome).map_err(|reason| GcloneError::EditorFailed {
            path: plan.target_dir.clone(),
            reason,
        })?;
        display::print_status(&format!("Opened {} in VSCode", plan.target_dir.display()));
    }

    display::print_success("Clone completed successfully!");
    Ok(())
}

/// Collapse spawn errors and unsuccessful exits into a message
fn check(outcome: std::io::Result<RunStatus>) -> std::result::Result<(), String> {
    match outcome {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => Err(status.to_string()),
        Err(e) => Err(e.to_string()),
    }
}
