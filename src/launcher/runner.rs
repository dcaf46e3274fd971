//! Blocking subprocess invocation of converter commands

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use super::ConverterCommand;

/// How a single converter invocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// Process exited with code 0
    Succeeded,
    /// Process exited nonzero, or was killed by a signal (`code` is `None`)
    Failed { code: Option<i32> },
    /// Process could not be started at all
    LaunchFailed { reason: String },
}

impl RunStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, RunStatus::Succeeded)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStatus::Succeeded => write!(f, "converted"),
            RunStatus::Failed { code: Some(code) } => write!(f, "exit code {}", code),
            RunStatus::Failed { code: None } => write!(f, "terminated by signal"),
            RunStatus::LaunchFailed { reason } => write!(f, "failed to launch: {}", reason),
        }
    }
}

/// Result of one converter invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub status: RunStatus,
    /// Combined stdout and stderr of the converter
    pub output: String,
}

/// Runs a converter command against one file
pub trait ConverterRunner {
    fn run(&self, command: &ConverterCommand, file: &Path) -> RunResult;
}

/// Spawns converters as real child processes and waits for each to exit
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    workdir: PathBuf,
}

impl ProcessRunner {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }
}

impl ConverterRunner for ProcessRunner {
    fn run(&self, command: &ConverterCommand, file: &Path) -> RunResult {
        debug!(command = %command, file = %file.display(), "launching converter");

        let output = Command::new(&command.program)
            .args(&command.args)
            .arg(file)
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .output();

        match output {
            Ok(output) => {
                let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
                text.push_str(&String::from_utf8_lossy(&output.stderr));
                for line in text.lines() {
                    debug!(file = %file.display(), "{}", line);
                }

                let status = if output.status.success() {
                    RunStatus::Succeeded
                } else {
                    RunStatus::Failed {
                        code: output.status.code(),
                    }
                };
                RunResult {
                    status,
                    output: text,
                }
            }
            Err(e) => {
                warn!(command = %command, error = %e, "converter could not be launched");
                RunResult {
                    status: RunStatus::LaunchFailed {
                        reason: e.to_string(),
                    },
                    output: String::new(),
                }
            }
        }
    }
}
