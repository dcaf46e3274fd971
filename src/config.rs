//! Configuration file loading and settings resolution

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::Cli;
use crate::launcher::{ConverterCommand, Direction};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "jyconv.toml";

/// Values read from a TOML config file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Command line for the JSON to YAML converter, e.g. `python j2y.py`
    pub json_to_yaml_cmd: Option<String>,
    /// Command line for the YAML to JSON converter
    pub yaml_to_json_cmd: Option<String>,
    /// Working directory for converter processes
    pub workdir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load the explicit config file, or `./jyconv.toml` if it exists, or defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Fully resolved launcher settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherSettings {
    pub json_to_yaml: ConverterCommand,
    pub yaml_to_json: ConverterCommand,
    pub workdir: PathBuf,
}

impl LauncherSettings {
    /// Merge CLI flags (which already carry env fallbacks), the config file,
    /// and built-in defaults, in that order of precedence.
    pub fn resolve(cli: &Cli, file: &AppConfig) -> Result<Self> {
        let json_to_yaml = resolve_command(
            Direction::JsonToYaml,
            cli.json_to_yaml_cmd.as_ref(),
            file.json_to_yaml_cmd.as_deref(),
        )?;
        let yaml_to_json = resolve_command(
            Direction::YamlToJson,
            cli.yaml_to_json_cmd.as_ref(),
            file.yaml_to_json_cmd.as_deref(),
        )?;

        let workdir = match cli.workdir.clone().or_else(|| file.workdir.clone()) {
            Some(dir) => dir,
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };
        if !workdir.is_dir() {
            anyhow::bail!("Working directory does not exist: {}", workdir.display());
        }

        Ok(Self {
            json_to_yaml,
            yaml_to_json,
            workdir,
        })
    }
}

fn resolve_command(
    direction: Direction,
    from_cli: Option<&ConverterCommand>,
    from_file: Option<&str>,
) -> Result<ConverterCommand> {
    if let Some(command) = from_cli {
        return Ok(command.clone());
    }
    if let Some(raw) = from_file {
        return ConverterCommand::parse(raw)
            .with_context(|| format!("Invalid {} converter in config file", direction));
    }
    ConverterCommand::bundled(direction)
        .with_context(|| format!("Failed to locate bundled {} converter", direction))
}
