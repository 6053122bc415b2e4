use log::debug;
use std::ffi::OsStr;
use std::fmt;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Exit status of an external command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    /// Exit code, `None` if the process was terminated by a signal
    pub code: Option<i32>,
}

impl RunStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for RunStatus {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status: {}", code),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Runs external programs on behalf of the clone orchestrator
pub trait Runner {
    /// Run `program` with `args`, optionally inside `cwd`, and wait for it
    fn run(&self, program: &str, args: &[&OsStr], cwd: Option<&Path>) -> io::Result<RunStatus>;
}

/// Runner that spawns real processes with inherited stdio
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, program: &str, args: &[&OsStr], cwd: Option<&Path>) -> io::Result<RunStatus> {
        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        debug!("Running {} {:?} in {:?}", program, args, cwd);
        let status = command.status()?;
        Ok(status.into())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_status_display() {
        assert_eq!(RunStatus { code: Some(128) }.to_string(), "exit status: 128");
        assert_eq!(RunStatus { code: None }.to_string(), "terminated by signal");
    }

    #[test]
    fn test_run_status_success() {
        assert!(RunStatus { code: Some(0) }.success());
        assert!(!RunStatus { code: Some(1) }.success());
        assert!(!RunStatus { code: None }.success());
    }

    #[test]
    fn test_system_runner_missing_program() {
        let result = SystemRunner.run("gclone-definitely-not-a-program", &[], None);
        assert!(result.is_err());
    }

    #[test]
    #[cfg(unix)]
    fn test_system_runner_reports_exit_code() {
        let status = SystemRunner
            .run("sh", &[OsStr::new("-c"), OsStr::new("exit 3")], None).unwrap();
        assert_eq!(status.code, Some(3));

        let temp = tempfile::TempDir::new().unwrap();
        let status = SystemRunner
            .run("sh", &[OsStr::new("-c"), OsStr::new("test -d .")], Some(temp.path()))
            .unwrap();
        assert!(status.success());
    }
}
