//! Progress bar helpers using indicatif

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for known-length operations
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("    {prefix} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb.set_prefix(message.to_string());
    pb
}
