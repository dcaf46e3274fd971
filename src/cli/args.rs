//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::launcher::{parse_command_arg, ConverterCommand};

/// jyconv - Convert batches of JSON and YAML files through external converters
#[derive(Parser, Debug)]
#[command(name = "jyconv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// TOML config file. Defaults to ./jyconv.toml when that file exists.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Converter command for JSON to YAML (the file path is appended).
    /// Defaults to this executable's bundled converter.
    #[arg(
        long,
        global = true,
        env = "JYCONV_JSON_TO_YAML_CMD",
        value_parser = parse_command_arg
    )]
    pub json_to_yaml_cmd: Option<ConverterCommand>,

    /// Converter command for YAML to JSON (the file path is appended).
    /// Defaults to this executable's bundled converter.
    #[arg(
        long,
        global = true,
        env = "JYCONV_YAML_TO_JSON_CMD",
        value_parser = parse_command_arg
    )]
    pub yaml_to_json_cmd: Option<ConverterCommand>,

    /// Working directory for converter processes (defaults to the current directory)
    #[arg(long, global = true)]
    pub workdir: Option<PathBuf>,

    /// Log converter output and launcher diagnostics to stderr
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Convert the given .json files to YAML (up to 10 files)
    JsonToYaml {
        /// Files to convert; files without a .json suffix are skipped
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Convert the given .yaml/.yml files to JSON (up to 10 files)
    YamlToJson {
        /// Files to convert; files without a .yaml or .yml suffix are skipped
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Bundled converter: write <stem>_converted.yaml next to a JSON file
    #[command(hide = true)]
    J2y { input: PathBuf },

    /// Bundled converter: write <stem>_converted.json next to a YAML file
    #[command(hide = true)]
    Y2j { input: PathBuf },
}

impl Cli {
    /// Default tracing filter when RUST_LOG is not set
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
