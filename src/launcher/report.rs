//! Outcome of a conversion run

use std::path::PathBuf;
use std::time::Duration;

use super::{Direction, RunStatus};

/// What happened to one submitted file
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub status: RunStatus,
    pub output: String,
    pub elapsed: Duration,
}

/// Per-file outcomes and the success tally for one direction
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub direction: Direction,
    /// One entry per file submitted to the converter, in selection order
    pub outcomes: Vec<FileOutcome>,
    /// Selected files that did not match the direction
    pub skipped: usize,
}

impl ConversionReport {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            outcomes: Vec::new(),
            skipped: 0,
        }
    }

    pub fn submitted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.status.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.submitted() - self.success_count()
    }

    /// e.g. "3 JSON file(s) converted to YAML."
    pub fn message(&self) -> String {
        format!(
            "{} {} file(s) converted to {}.",
            self.success_count(),
            self.direction.source_label(),
            self.direction.target_label()
        )
    }
}
