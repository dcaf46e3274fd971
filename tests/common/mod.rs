//! Shared test utilities for integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use jyconv::launcher::{ConverterCommand, ConverterRunner, RunResult, RunStatus};
use tempfile::TempDir;

/// Write `contents` to `name` inside `dir`, returning the full path
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Create `count` empty files named `file_<i>.<ext>`
pub fn create_files(dir: &TempDir, count: usize, ext: &str) -> Vec<PathBuf> {
    (0..count)
        .map(|i| write_file(dir, &format!("file_{}.{}", i, ext), ""))
        .collect()
}

/// A converter command that is never actually spawned by fake runners
pub fn dummy_command(name: &str) -> ConverterCommand {
    ConverterCommand::new(name, vec![])
}

/// Fake runner that records every invocation and fails files by name
#[derive(Default)]
pub struct RecordingRunner {
    pub calls: RefCell<Vec<(ConverterCommand, PathBuf)>>,
    failing: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files whose name is in `names` exit with code 1
    pub fn failing(names: &[&str]) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            failing: names.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn called_files(&self) -> Vec<PathBuf> {
        self.calls.borrow().iter().map(|(_, f)| f.clone()).collect()
    }

    pub fn called_names(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|(_, f)| f.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }
}

impl ConverterRunner for RecordingRunner {
    fn run(&self, command: &ConverterCommand, file: &Path) -> RunResult {
        self.calls
            .borrow_mut()
            .push((command.clone(), file.to_path_buf()));

        let name = file.file_name().unwrap().to_string_lossy().to_string();
        let status = if self.failing.contains(&name) {
            RunStatus::Failed { code: Some(1) }
        } else {
            RunStatus::Succeeded
        };
        RunResult {
            status,
            output: format!("processed {}", name),
        }
    }
}
