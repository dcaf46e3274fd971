//! Tests for extension filtering and success tallying

mod common;

use std::path::PathBuf;

use common::{create_files, dummy_command, write_file, RecordingRunner};
use jyconv::launcher::{convert_files, Direction, Launcher, LauncherError, RunStatus};
use tempfile::TempDir;

fn launcher_with(runner: RecordingRunner) -> Launcher<RecordingRunner> {
    Launcher::new(dummy_command("j2y"), dummy_command("y2j"), runner)
}

fn mixed_selection(temp_dir: &TempDir) -> Vec<PathBuf> {
    vec![
        write_file(temp_dir, "a.json", "{}"),
        write_file(temp_dir, "b.yaml", "x: 1"),
        write_file(temp_dir, "c.yml", "y: 2"),
        write_file(temp_dir, "d.txt", "text"),
        write_file(temp_dir, "e.json", "[]"),
        write_file(temp_dir, "F.JSON", "{}"),
    ]
}

#[test]
fn test_json_to_yaml_submits_only_json_files() {
    let temp_dir = TempDir::new().unwrap();
    let mut launcher = launcher_with(RecordingRunner::new());
    launcher.select(mixed_selection(&temp_dir)).unwrap();

    let report = launcher.convert(Direction::JsonToYaml).unwrap();

    assert_eq!(launcher.runner().called_names(), vec!["a.json", "e.json"]);
    assert_eq!(report.submitted(), 2);
    assert_eq!(report.skipped, 4);
    assert_eq!(report.success_count(), 2);
    assert_eq!(report.message(), "2 JSON file(s) converted to YAML.");
}

#[test]
fn test_yaml_to_json_submits_yaml_and_yml() {
    let temp_dir = TempDir::new().unwrap();
    let mut launcher = launcher_with(RecordingRunner::new());
    launcher.select(mixed_selection(&temp_dir)).unwrap();

    let report = launcher.convert(Direction::YamlToJson).unwrap();

    assert_eq!(launcher.runner().called_names(), vec!["b.yaml", "c.yml"]);
    assert_eq!(report.success_count(), 2);
    assert_eq!(report.message(), "2 YAML file(s) converted to JSON.");
}

#[test]
fn test_uses_direction_specific_command() {
    let temp_dir = TempDir::new().unwrap();
    let mut launcher = launcher_with(RecordingRunner::new());
    launcher.select(mixed_selection(&temp_dir)).unwrap();

    launcher.convert(Direction::YamlToJson).unwrap();

    let calls = launcher.runner().calls.borrow();
    assert!(calls.iter().all(|(cmd, _)| *cmd == dummy_command("y2j")));
}

#[test]
fn test_success_count_excludes_failures() {
    let temp_dir = TempDir::new().unwrap();
    let files = create_files(&temp_dir, 5, "json");
    let mut launcher = launcher_with(RecordingRunner::failing(&["file_1.json", "file_3.json"]));
    launcher.select(files).unwrap();

    let report = launcher.convert(Direction::JsonToYaml).unwrap();

    assert_eq!(report.submitted(), 5, "Failures should not stop the run");
    assert_eq!(report.success_count(), 3);
    assert_eq!(report.failure_count(), 2);
    assert_eq!(
        report.outcomes[1].status,
        RunStatus::Failed { code: Some(1) }
    );
}

#[test]
fn test_no_matching_files_reports_zero() {
    let temp_dir = TempDir::new().unwrap();
    let files = create_files(&temp_dir, 3, "yaml");
    let mut launcher = launcher_with(RecordingRunner::new());
    launcher.select(files).unwrap();

    let report = launcher.convert(Direction::JsonToYaml).unwrap();

    assert!(launcher.runner().calls.borrow().is_empty());
    assert_eq!(report.success_count(), 0);
    assert_eq!(report.skipped, 3);
    assert_eq!(report.message(), "0 JSON file(s) converted to YAML.");
}

#[test]
fn test_empty_selection_is_an_error() {
    let launcher = launcher_with(RecordingRunner::new());

    let err = launcher.convert(Direction::YamlToJson).unwrap_err();

    assert!(matches!(err, LauncherError::EmptySelection(Direction::YamlToJson)));
    assert_eq!(err.to_string(), "Please select YAML files first.");
}

#[test]
fn test_runner_receives_absolute_paths() {
    let runner = RecordingRunner::new();
    let files = vec![PathBuf::from("relative/input.json")];

    convert_files(
        Direction::JsonToYaml,
        &files,
        &dummy_command("j2y"),
        &runner,
        |_| {},
    );

    let called = runner.called_files();
    assert_eq!(called.len(), 1);
    assert!(called[0].is_absolute());
    assert!(called[0].ends_with("relative/input.json"));
}

#[test]
fn test_progress_callback_sees_each_file_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let mut launcher = launcher_with(RecordingRunner::new());
    launcher.select(mixed_selection(&temp_dir)).unwrap();

    let mut seen = Vec::new();
    let report = launcher
        .convert_with_progress(Direction::JsonToYaml, |outcome| {
            seen.push(outcome.path.file_name().unwrap().to_string_lossy().to_string());
        })
        .unwrap();

    assert_eq!(seen, vec!["a.json", "e.json"]);
    assert_eq!(report.outcomes[0].output, "processed a.json");
}

#[test]
fn test_matching_files_preview() {
    let temp_dir = TempDir::new().unwrap();
    let mut launcher = launcher_with(RecordingRunner::new());
    launcher.select(mixed_selection(&temp_dir)).unwrap();

    assert_eq!(launcher.matching_files(Direction::JsonToYaml).len(), 2);
    assert_eq!(launcher.matching_files(Direction::YamlToJson).len(), 2);
}
