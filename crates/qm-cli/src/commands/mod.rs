pub mod journal;
pub mod prompt;
pub mod score;
pub mod versus;

use std::io;
use std::path::Path;

/// Read a whole file, or stdin when no path is given.
fn read_text(file: Option<&Path>) -> Result<String, String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display())),
        None => io::read_to_string(io::stdin()).map_err(|e| format!("cannot read stdin: {e}")),
    }
}

/// Shorten text for a table cell.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let head: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{head}...")
}
