//! Converter command lines

use std::fmt;
use std::path::PathBuf;

use super::{Direction, LauncherError};

/// An external converter: a program plus its leading arguments.
///
/// The file to convert is appended as the final argument at launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl ConverterCommand {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Parse a shell-like command string such as `python j2y.py`
    pub fn parse(value: &str) -> Result<Self, LauncherError> {
        let invalid = |reason: &str| LauncherError::InvalidCommand {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let mut words = shlex::split(value).ok_or_else(|| invalid("unbalanced quotes"))?;
        if words.is_empty() {
            return Err(invalid("command is empty"));
        }
        let program = words.remove(0);
        Ok(Self::new(program, words))
    }

    /// The converter shipped inside this executable for `direction`
    pub fn bundled(direction: Direction) -> std::io::Result<Self> {
        let exe = std::env::current_exe()?;
        Ok(Self::new(
            exe,
            vec![direction.bundled_subcommand().to_string()],
        ))
    }
}

impl fmt::Display for ConverterCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let program = self.program.to_string_lossy();
        let words = std::iter::once(&*program).chain(self.args.iter().map(String::as_str));
        match shlex::try_join(words.clone()) {
            Ok(joined) => write!(f, "{}", joined),
            Err(_) => write!(f, "{}", words.collect::<Vec<_>>().join(" ")),
        }
    }
}

/// clap value parser for converter command options
pub fn parse_command_arg(value: &str) -> Result<ConverterCommand, String> {
    ConverterCommand::parse(value).map_err(|e| e.to_string())
}
