//! Interactive launcher session and non-interactive batch runs

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use super::picker::{run_file_picker, PickerResult};
use super::prompts::{select_action, Action};
use crate::config::LauncherSettings;
use crate::launcher::{
    display_name, ConversionReport, ConverterRunner, Direction, Launcher, ProcessRunner,
};
use crate::report::ConversionSummary;
use crate::utils::{
    create_progress_bar, print_banner, print_completion, print_info, print_selection,
    print_success, print_warning,
};

/// Build a launcher that spawns real converter processes
pub fn build_launcher(settings: &LauncherSettings) -> Launcher<ProcessRunner> {
    Launcher::new(
        settings.json_to_yaml.clone(),
        settings.yaml_to_json.clone(),
        ProcessRunner::new(settings.workdir.clone()),
    )
}

/// Run the interactive menu loop until the user quits
pub fn run_session(settings: &LauncherSettings) -> Result<()> {
    print_banner(env!("CARGO_PKG_VERSION"));

    let mut launcher = build_launcher(settings);
    let mut last_dir: Option<PathBuf> = None;

    loop {
        print_selection(launcher.selection());

        match select_action()? {
            Action::Browse => match run_file_picker(last_dir.clone())? {
                PickerResult::Selected(paths) => {
                    last_dir = paths
                        .first()
                        .and_then(|p| p.parent())
                        .map(|p| p.to_path_buf());
                    apply_selection(&mut launcher, paths);
                }
                PickerResult::Cancelled => print_info("Selection unchanged"),
            },
            Action::Convert(direction) => {
                run_conversion(&launcher, direction);
            }
            Action::Reset => {
                launcher.reset();
                print_info("Selection cleared");
            }
            Action::Quit => break,
        }
    }

    print_completion("Goodbye!");
    Ok(())
}

/// Replace the launcher's selection, warning on overflow.
/// Returns whether the selection was accepted.
pub fn apply_selection<R: ConverterRunner>(launcher: &mut Launcher<R>, paths: Vec<PathBuf>) -> bool {
    match launcher.select(paths) {
        Ok(()) => {
            print_success(&format!("{} file(s) selected", launcher.selection().len()));
            true
        }
        Err(e) => {
            print_warning(&e.to_string());
            false
        }
    }
}

/// Convert the current selection with a progress bar and print the summary.
///
/// Returns `None` (after warning) when there is nothing selected.
pub fn run_conversion<R: ConverterRunner>(
    launcher: &Launcher<R>,
    direction: Direction,
) -> Option<ConversionReport> {
    let pending = launcher.matching_files(direction).len();
    let pb = create_progress_bar(pending as u64, &format!("{}", direction));

    let result = launcher.convert_with_progress(direction, |outcome| {
        debug!(file = %outcome.path.display(), status = %outcome.status, "file finished");
        pb.set_message(display_name(&outcome.path));
        pb.inc(1);
    });
    pb.finish_and_clear();

    match result {
        Ok(report) => {
            ConversionSummary::new(&report).display();
            print_completion(&report.message());
            Some(report)
        }
        Err(e) => {
            print_warning(&e.to_string());
            None
        }
    }
}

/// Select `files` and convert them in one go, for the non-interactive subcommands.
///
/// Returns `None` when the selection was rejected or empty; the warning has
/// already been printed.
pub fn run_batch(
    settings: &LauncherSettings,
    direction: Direction,
    files: Vec<PathBuf>,
) -> Result<Option<ConversionReport>> {
    let mut launcher = build_launcher(settings);
    if !apply_selection(&mut launcher, files) {
        return Ok(None);
    }

    Ok(run_conversion(&launcher, direction))
}
