//! Conversion direction and extension matching

use std::fmt;
use std::path::{Path, PathBuf};

/// Which way a conversion runs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `.json` files are converted to YAML
    JsonToYaml,
    /// `.yaml` / `.yml` files are converted to JSON
    YamlToJson,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::JsonToYaml, Direction::YamlToJson];

    /// File name suffixes accepted as input for this direction
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Direction::JsonToYaml => &[".json"],
            Direction::YamlToJson => &[".yaml", ".yml"],
        }
    }

    /// Check whether a file is a conversion candidate.
    ///
    /// Matching is a case-sensitive suffix test on the file name, so
    /// `DATA.JSON` is not picked up by the forward direction.
    pub fn matches(self, path: &Path) -> bool {
        path.file_name()
            .map(|name| {
                let name = name.to_string_lossy();
                self.extensions().iter().any(|ext| name.ends_with(ext))
            })
            .unwrap_or(false)
    }

    /// Keep only the files this direction converts, preserving order
    pub fn filter<'a>(self, files: &'a [PathBuf]) -> Vec<&'a Path> {
        files
            .iter()
            .map(|p| p.as_path())
            .filter(|p| self.matches(p))
            .collect()
    }

    pub fn source_label(self) -> &'static str {
        match self {
            Direction::JsonToYaml => "JSON",
            Direction::YamlToJson => "YAML",
        }
    }

    pub fn target_label(self) -> &'static str {
        match self {
            Direction::JsonToYaml => "YAML",
            Direction::YamlToJson => "JSON",
        }
    }

    /// Name of the hidden subcommand that implements this direction
    pub fn bundled_subcommand(self) -> &'static str {
        match self {
            Direction::JsonToYaml => "j2y",
            Direction::YamlToJson => "y2j",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.source_label(), self.target_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_accepts_both_suffixes() {
        assert!(Direction::YamlToJson.matches(Path::new("a/b/config.yaml")));
        assert!(Direction::YamlToJson.matches(Path::new("config.yml")));
        assert!(!Direction::YamlToJson.matches(Path::new("config.json")));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(!Direction::JsonToYaml.matches(Path::new("DATA.JSON")));
        assert!(Direction::JsonToYaml.matches(Path::new("data.json")));
    }

    #[test]
    fn test_directory_component_is_ignored() {
        assert!(!Direction::JsonToYaml.matches(Path::new("dir.json/notes.txt")));
    }
}
