//! Mode command implementation.

use eventkit_core::Mode;

use crate::config::Settings;

pub fn run(value: Option<String>, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let mode = match value {
        Some(v) => v.parse::<Mode>()?,
        None => settings.mode,
    };
    println!("{}", mode);
    Ok(())
}
