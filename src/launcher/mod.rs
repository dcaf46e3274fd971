//! Conversion launcher
//!
//! Holds the current file selection and runs one external converter
//! process per matching file, tallying the ones that exit cleanly.

mod command;
mod direction;
mod error;
mod report;
mod runner;
mod selection;

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::info;

pub use command::{parse_command_arg, ConverterCommand};
pub use direction::Direction;
pub use error::LauncherError;
pub use report::{ConversionReport, FileOutcome};
pub use runner::{ConverterRunner, ProcessRunner, RunResult, RunStatus};
pub use selection::{display_name, FileSelection, SelectionError, MAX_SELECTION};

/// Selection state plus the converter configured for each direction
pub struct Launcher<R> {
    selection: FileSelection,
    json_to_yaml: ConverterCommand,
    yaml_to_json: ConverterCommand,
    runner: R,
}

impl<R: ConverterRunner> Launcher<R> {
    pub fn new(json_to_yaml: ConverterCommand, yaml_to_json: ConverterCommand, runner: R) -> Self {
        Self {
            selection: FileSelection::new(),
            json_to_yaml,
            yaml_to_json,
            runner,
        }
    }

    /// Replace the selection. On overflow the selection ends up empty.
    pub fn select(&mut self, paths: Vec<PathBuf>) -> Result<(), LauncherError> {
        self.selection.replace(paths)?;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.selection.clear();
    }

    pub fn selection(&self) -> &FileSelection {
        &self.selection
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn command_for(&self, direction: Direction) -> &ConverterCommand {
        match direction {
            Direction::JsonToYaml => &self.json_to_yaml,
            Direction::YamlToJson => &self.yaml_to_json,
        }
    }

    /// Selected files that `direction` would submit
    pub fn matching_files(&self, direction: Direction) -> Vec<&Path> {
        direction.filter(self.selection.paths())
    }

    pub fn convert(&self, direction: Direction) -> Result<ConversionReport, LauncherError> {
        self.convert_with_progress(direction, |_| {})
    }

    /// Convert the current selection, calling `on_file` after each file finishes
    pub fn convert_with_progress(
        &self,
        direction: Direction,
        on_file: impl FnMut(&FileOutcome),
    ) -> Result<ConversionReport, LauncherError> {
        if self.selection.is_empty() {
            return Err(LauncherError::EmptySelection(direction));
        }
        Ok(convert_files(
            direction,
            self.selection.paths(),
            self.command_for(direction),
            &self.runner,
            on_file,
        ))
    }
}

/// Run `command` once per file in `files` that matches `direction`.
///
/// Files are processed sequentially in the given order. Each converter
/// receives the absolute path of its file. Non-matching files are counted
/// as skipped and never reach the runner.
pub fn convert_files<R: ConverterRunner + ?Sized>(
    direction: Direction,
    files: &[PathBuf],
    command: &ConverterCommand,
    runner: &R,
    mut on_file: impl FnMut(&FileOutcome),
) -> ConversionReport {
    let mut report = ConversionReport::new(direction);
    let matching = direction.filter(files);
    report.skipped = files.len() - matching.len();

    for path in matching {
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        let started = Instant::now();
        let result = runner.run(command, &absolute);

        let outcome = FileOutcome {
            path: path.to_path_buf(),
            status: result.status,
            output: result.output,
            elapsed: started.elapsed(),
        };
        on_file(&outcome);
        report.outcomes.push(outcome);
    }

    info!(
        direction = %direction,
        submitted = report.submitted(),
        succeeded = report.success_count(),
        skipped = report.skipped,
        "conversion run finished"
    );

    report
}
