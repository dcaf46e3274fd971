//! Terminal styling utilities

use console::{style, Emoji};

use crate::launcher::{FileSelection, MAX_SELECTION};

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", ">> ");

/// Print the application banner
pub fn print_banner(version: &str) {
    let banner = r#"
      ┏┓┓┏┏┓┏┓┏┓┓┏
       ┃┗┫┃ ┃┃┃┃┃┃
      ┗┛┗┛┗┛┗┛┛┗┗┛
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {} {}",
        style("⇄").magenta().bold(),
        style("JSON <-> YAML Converter").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!(
        "    Select up to {} files and choose an action.",
        style(MAX_SELECTION).yellow().bold()
    );
    println!();
}

/// Print the current selection, or "No files selected"
pub fn print_selection(selection: &FileSelection) {
    println!();
    if selection.is_empty() {
        println!("    {}{}", FOLDER, style("No files selected").dim());
    } else {
        println!(
            "    {}{} {}",
            FOLDER,
            style("Selected Files:").white().bold(),
            style(format!("({}/{})", selection.len(), MAX_SELECTION)).dim()
        );
        for name in selection.file_names() {
            println!("      {} {}", style("•").dim(), name);
        }
    }
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {}{}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {}{}", WARN, style(message).yellow().bold());
}

/// Print a closing message
pub fn print_completion(message: &str) {
    println!();
    println!("    {}{}", SPARKLE, style(message).green().bold());
    println!();
}

/// Shorten a string to `max_len` characters, keeping the tail
pub fn truncate_string(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        s.to_string()
    } else {
        let tail: String = s.chars().skip(count + 3 - max_len).collect();
        format!("...{}", tail)
    }
}
