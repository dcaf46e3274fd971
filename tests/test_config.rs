//! Tests for config file loading and settings precedence

mod common;

use clap::Parser;
use common::write_file;
use jyconv::cli::Cli;
use jyconv::config::{AppConfig, LauncherSettings};
use jyconv::launcher::ConverterCommand;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(
        &temp_dir,
        "jyconv.toml",
        r#"
json_to_yaml_cmd = "python j2y.py"
yaml_to_json_cmd = "python y2j.py"
workdir = "/srv/convert"
"#,
    );

    let config = AppConfig::from_file(&path).unwrap();

    assert_eq!(config.json_to_yaml_cmd.as_deref(), Some("python j2y.py"));
    assert_eq!(config.yaml_to_json_cmd.as_deref(), Some("python y2j.py"));
    assert_eq!(config.workdir, Some(PathBuf::from("/srv/convert")));
}

#[test]
fn test_config_fields_are_optional() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(&temp_dir, "partial.toml", "json_to_yaml_cmd = \"j2y\"\n");

    let config = AppConfig::from_file(&path).unwrap();

    assert_eq!(config.json_to_yaml_cmd.as_deref(), Some("j2y"));
    assert!(config.yaml_to_json_cmd.is_none());
    assert!(config.workdir.is_none());
}

#[test]
fn test_config_rejects_unknown_keys() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(&temp_dir, "typo.toml", "json_to_yml_cmd = \"j2y\"\n");

    assert!(AppConfig::from_file(&path).is_err());
}

#[test]
fn test_explicit_missing_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = AppConfig::load(Some(&temp_dir.path().join("absent.toml"))).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_cli_overrides_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let workdir = temp_dir.path().to_str().unwrap();
    let cli = Cli::parse_from([
        "jyconv",
        "--json-to-yaml-cmd",
        "cli-j2y --fast",
        "--workdir",
        workdir,
    ]);
    let file = AppConfig {
        json_to_yaml_cmd: Some("file-j2y".to_string()),
        yaml_to_json_cmd: Some("file-y2j".to_string()),
        workdir: Some(PathBuf::from("/does/not/matter")),
    };

    let settings = LauncherSettings::resolve(&cli, &file).unwrap();

    assert_eq!(
        settings.json_to_yaml,
        ConverterCommand::new("cli-j2y", vec!["--fast".to_string()])
    );
    assert_eq!(settings.yaml_to_json, ConverterCommand::new("file-y2j", vec![]));
    assert_eq!(settings.workdir, temp_dir.path());
}

#[test]
fn test_defaults_use_bundled_converters() {
    let cli = Cli::parse_from(["jyconv"]);

    let settings = LauncherSettings::resolve(&cli, &AppConfig::default()).unwrap();

    assert_eq!(settings.json_to_yaml.args, vec!["j2y"]);
    assert_eq!(settings.yaml_to_json.args, vec!["y2j"]);
    assert_eq!(settings.json_to_yaml.program, std::env::current_exe().unwrap());
    assert_eq!(settings.workdir, std::env::current_dir().unwrap());
}

#[test]
fn test_invalid_command_in_config_file() {
    let cli = Cli::parse_from(["jyconv"]);
    let file = AppConfig {
        yaml_to_json_cmd: Some("   ".to_string()),
        ..Default::default()
    };

    let err = LauncherSettings::resolve(&cli, &file).unwrap_err();
    assert!(format!("{:#}", err).contains("command is empty"));
}

#[test]
fn test_missing_workdir_is_an_error() {
    let cli = Cli::parse_from(["jyconv", "--workdir", "/definitely/not/a/real/dir"]);

    assert!(LauncherSettings::resolve(&cli, &AppConfig::default()).is_err());
}
