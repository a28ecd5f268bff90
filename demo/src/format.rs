//! Output formatting utilities for the demo.

use clap::ValueEnum;
use vouch_constraint::Violations;

/// How the validation result is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable list.
    #[default]
    Text,
    /// JSON array of violations.
    Json,
}

/// Format violations as a bulleted list, or a success line when empty.
pub fn format_text(violations: &Violations) -> String {
    if violations.is_empty() {
        return "All fields are valid.\n".to_string();
    }
    let mut out = String::from("Validation errors:\n");
    for violation in violations {
        out.push_str("- ");
        out.push_str(&violation.message);
        out.push('\n');
    }
    out
}

/// Format violations as a pretty-printed JSON array.
pub fn format_json(violations: &Violations) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(violations)?;
    out.push('\n');
    Ok(out)
}
