//! Subcommand implementations.

pub mod canonicalize;
pub mod inspect;
pub mod labels;
pub mod mode;
pub mod role;
pub mod sign;
pub mod verify;

use std::io::{self, Read};

use eventkit_core::EventRecord;

/// Reads the whole input from a file, or stdin when no path is given.
pub fn read_input(input: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    let text = if let Some(path) = input {
        std::fs::read_to_string(&path).map_err(|e| format!("Failed to read file {}: {}", path, e))?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };
    Ok(text)
}

/// Reads and strictly parses a single event.
pub fn read_event(input: Option<String>) -> Result<EventRecord, Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let event = text
        .trim()
        .parse::<EventRecord>()
        .map_err(|e| format!("Invalid event: {}", e))?;
    Ok(event)
}
