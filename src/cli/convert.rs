//! Bundled JSON <-> YAML converters
//!
//! These back the hidden `j2y` and `y2j` subcommands, which the launcher
//! spawns as its default external converters.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;

/// Derive `<stem>_converted.<extension>` in the input's directory
pub fn output_path_for(input: &Path, extension: &str) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    parent.join(format!("{}_converted.{}", stem, extension))
}

/// Convert a JSON file to YAML, returning the path written
pub fn run_json_to_yaml(input: &Path) -> Result<PathBuf> {
    let output_path = output_path_for(input, "yaml");

    let text = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read JSON file: {}", input.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse JSON file: {}", input.display()))?;
    let yaml = serde_yaml::to_string(&value).context("Failed to serialize YAML")?;

    std::fs::write(&output_path, yaml)
        .with_context(|| format!("Failed to write YAML file: {}", output_path.display()))?;

    println!(
        "{} YAML conversion complete. Output saved to {}",
        style("✓").green(),
        output_path.display()
    );
    Ok(output_path)
}

/// Convert a YAML file to pretty-printed JSON, returning the path written
pub fn run_yaml_to_json(input: &Path) -> Result<PathBuf> {
    let output_path = output_path_for(input, "json");

    let text = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read YAML file: {}", input.display()))?;

    let value: serde_json::Value = if text.trim().is_empty() {
        serde_json::Value::Null
    } else {
        serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse YAML file: {}", input.display()))?
    };
    // A document with no content (blank, comments only, bare `---`) converts to `{}`
    let value = match value {
        serde_json::Value::Null => serde_json::Value::Object(serde_json::Map::new()),
        other => other,
    };
    let mut json = serde_json::to_string_pretty(&value).context("Failed to serialize JSON")?;
    json.push('\n');

    std::fs::write(&output_path, json)
        .with_context(|| format!("Failed to write JSON file: {}", output_path.display()))?;

    println!(
        "{} YAML to JSON conversion complete. Output saved to {}",
        style("✓").green(),
        output_path.display()
    );
    Ok(output_path)
}
