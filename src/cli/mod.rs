//! CLI module - argument parsing, file picker, and interactive session

mod args;
pub mod convert;
pub mod picker;
mod prompts;
pub mod session;

pub use args::{Cli, Commands};
pub use convert::{run_json_to_yaml, run_yaml_to_json};
pub use picker::{run_file_picker, PickerResult};
pub use prompts::*;
pub use session::{run_batch, run_session};
