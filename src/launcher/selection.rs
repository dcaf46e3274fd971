//! The current file selection

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Maximum number of files a single selection may hold
pub const MAX_SELECTION: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Please select up to {max} files only ({selected} selected)")]
    LimitExceeded { selected: usize, max: usize },
}

/// Ordered list of up to [`MAX_SELECTION`] file paths.
///
/// The list is replaced wholesale on every browse and emptied on reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelection {
    paths: Vec<PathBuf>,
}

impl FileSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with `paths`.
    ///
    /// An oversized list is rejected and leaves the selection empty.
    pub fn replace(&mut self, paths: Vec<PathBuf>) -> Result<(), SelectionError> {
        if paths.len() > MAX_SELECTION {
            self.paths.clear();
            return Err(SelectionError::LimitExceeded {
                selected: paths.len(),
                max: MAX_SELECTION,
            });
        }
        self.paths = paths;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.paths.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Bare file names, for display
    pub fn file_names(&self) -> Vec<String> {
        self.paths.iter().map(|p| display_name(p)).collect()
    }
}

/// File name of a path, falling back to the full path when it has none
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
