//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::Select;

use crate::launcher::Direction;

/// An entry in the main action menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Browse,
    Convert(Direction),
    Reset,
    Quit,
}

impl Action {
    pub const MENU: [Action; 5] = [
        Action::Browse,
        Action::Convert(Direction::JsonToYaml),
        Action::Convert(Direction::YamlToJson),
        Action::Reset,
        Action::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::Browse => "📁 Browse Files",
            Action::Convert(Direction::JsonToYaml) => "🔄 JSON to YAML",
            Action::Convert(Direction::YamlToJson) => "🔁 YAML to JSON",
            Action::Reset => "❌ Reset",
            Action::Quit => "Quit",
        }
    }
}

/// Ask the user what to do next
pub fn select_action() -> Result<Action> {
    let labels: Vec<&str> = Action::MENU.iter().map(|a| a.label()).collect();
    let index = Select::new()
        .with_prompt("Choose an action")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Action::MENU[index])
}
