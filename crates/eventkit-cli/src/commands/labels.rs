//! Labels command implementation.

use serde_json::json;

use super::read_event;
use crate::output::format_json;

pub fn run(input: Option<String>, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let event = read_event(input)?;

    let labels = [
        ("fullName", event.full_name()),
        ("uniqueName", event.unique_name()),
        ("entityUrl", event.entity_url()),
        ("entityName", event.entity_name()),
        ("versionedEntityName", event.versioned_entity_name()),
        ("tableName", event.table_name()),
    ];

    if json_output {
        let map: serde_json::Map<String, serde_json::Value> = labels
            .iter()
            .map(|(key, value)| (key.to_string(), json!(value)))
            .collect();
        println!("{}", format_json(&serde_json::Value::Object(map)));
    } else {
        for (key, value) in &labels {
            println!("{:<20} {}", key, value);
        }
    }
    Ok(())
}
