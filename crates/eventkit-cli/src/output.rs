//! Output formatting utilities.

use serde_json::Value;

/// Outcome of checking one event line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Signature matches the fields.
    Ok,
    /// No signature present.
    Unsigned,
    /// Signature present but does not match.
    Tampered,
    /// Line is not a valid event.
    Malformed,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Ok => "ok",
            Verdict::Unsigned => "unsigned",
            Verdict::Tampered => "tampered",
            Verdict::Malformed => "malformed",
        }
    }
}

/// Formats a value as pretty JSON.
pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a verification result as a table row.
pub fn format_table_row(line: usize, id: &str, name: &str, verdict: Verdict) -> String {
    format!(
        "{:<6} {:<24} {:<48} {}",
        line,
        truncate(if id.is_empty() { "?" } else { id }, 24),
        truncate(if name.is_empty() { "?" } else { name }, 48),
        verdict.as_str()
    )
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!("{:<6} {:<24} {:<48} {}", "LINE", "ID", "EVENT", "VERDICT");
    println!("{}", "-".repeat(90));
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
