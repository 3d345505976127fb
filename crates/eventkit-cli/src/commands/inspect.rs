//! Inspect command implementation.

use chrono::{TimeZone, Utc};
use serde_json::json;

use super::read_event;
use crate::config::Settings;
use crate::output::format_json;

const REDACTED: &str = "<redacted>";

pub fn run(input: Option<String>, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let event = read_event(input)?;

    let verdict = if event.is_empty() {
        "unsigned"
    } else if event.verify_sign() {
        "ok"
    } else {
        "tampered"
    };

    let created = Utc
        .timestamp_millis_opt(event.created_at)
        .single()
        .map(|at| at.to_rfc3339());

    let access_token = if settings.mode.is_production() && !event.access_token.is_empty() {
        REDACTED
    } else {
        event.access_token.as_str()
    };

    let output = json!({
        "id": event.id,
        "mode": settings.mode.as_str(),
        "createdAt": event.created_at,
        "createdAtUtc": created,
        "accessToken": access_token,
        "sign": event.sign,
        "verdict": verdict,
        "labels": {
            "fullName": event.full_name(),
            "uniqueName": event.unique_name(),
            "entityUrl": event.entity_url(),
            "tableName": event.table_name(),
        },
    });

    println!("{}", format_json(&output));
    Ok(())
}
