//! jyconv: JSON <-> YAML Conversion Launcher
//!
//! Pick up to ten files and convert JSON to YAML or YAML to JSON by
//! launching one converter process per file.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use jyconv::cli::{self, Cli, Commands};
use jyconv::config::{AppConfig, LauncherSettings};
use jyconv::launcher::Direction;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so converter stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command.clone() {
        // Bundled converters don't need launcher settings
        Some(Commands::J2y { input }) => cli::run_json_to_yaml(&input).map(|_| ExitCode::SUCCESS),
        Some(Commands::Y2j { input }) => cli::run_yaml_to_json(&input).map(|_| ExitCode::SUCCESS),
        Some(Commands::JsonToYaml { files }) => batch(&cli, Direction::JsonToYaml, files),
        Some(Commands::YamlToJson { files }) => batch(&cli, Direction::YamlToJson, files),
        None => cli::run_session(&load_settings(&cli)?).map(|_| ExitCode::SUCCESS),
    }
}

/// Non-interactive run; a rejected selection has already been reported
fn batch(cli: &Cli, direction: Direction, files: Vec<PathBuf>) -> Result<ExitCode> {
    match cli::run_batch(&load_settings(cli)?, direction, files)? {
        Some(_) => Ok(ExitCode::SUCCESS),
        None => Ok(ExitCode::FAILURE),
    }
}

fn load_settings(cli: &Cli) -> Result<LauncherSettings> {
    let file_config = AppConfig::load(cli.config.as_deref())?;
    let settings = LauncherSettings::resolve(cli, &file_config)?;
    debug!(
        json_to_yaml = %settings.json_to_yaml,
        yaml_to_json = %settings.yaml_to_json,
        workdir = %settings.workdir.display(),
        "launcher settings resolved"
    );
    Ok(settings)
}
