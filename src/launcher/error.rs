//! Launcher error types

use thiserror::Error;

use super::{Direction, SelectionError};

#[derive(Debug, Error)]
pub enum LauncherError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("Please select {} files first.", .0.source_label())]
    EmptySelection(Direction),

    #[error("Invalid converter command '{value}': {reason}")]
    InvalidCommand { value: String, reason: String },
}
