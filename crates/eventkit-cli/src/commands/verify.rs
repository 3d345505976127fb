//! Verify command implementation.

use eventkit_core::EventRecord;
use serde_json::json;
use tracing::debug;

use super::read_input;
use crate::output::{self, Verdict};

pub fn run(input: Option<String>, strict: bool, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;

    let mut results = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = index + 1;
        match line.parse::<EventRecord>() {
            Ok(event) => {
                let verdict = if event.is_empty() {
                    Verdict::Unsigned
                } else if event.verify_sign() {
                    Verdict::Ok
                } else {
                    Verdict::Tampered
                };
                results.push((line_no, event.id.clone(), event.unique_name(), verdict));
            }
            Err(e) => {
                debug!(line = line_no, error = %e, "skipping malformed event");
                results.push((line_no, String::new(), String::new(), Verdict::Malformed));
            }
        }
    }

    let failed = results
        .iter()
        .filter(|(_, _, _, verdict)| *verdict != Verdict::Ok)
        .count();

    if json_output {
        let json_results: Vec<_> = results
            .iter()
            .map(|(line, id, name, verdict)| {
                json!({
                    "line": line,
                    "id": id,
                    "event": name,
                    "verdict": verdict.as_str(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json_results)?);
    } else {
        output::print_table_header();
        for (line, id, name, verdict) in &results {
            println!("{}", output::format_table_row(*line, id, name, *verdict));
        }
    }

    if strict && failed > 0 {
        return Err(format!("{} of {} events failed verification", failed, results.len()).into());
    }

    Ok(())
}
