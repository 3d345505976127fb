//! Sign command implementation.

use tracing::info;

use super::read_event;

pub fn run(input: Option<String>, stamp: bool, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut event = read_event(input)?;

    if stamp && event.created_at == 0 {
        event.created_at = eventkit_core::time::now_millis();
    }
    event.generate_sign();
    info!(event = %event.unique_name(), sign = %event.sign, "signed event");

    let json = event.to_json_string()?;
    if pretty {
        let value: serde_json::Value = serde_json::from_str(&json)?;
        println!("{}", crate::output::format_json(&value));
    } else {
        println!("{}", json);
    }
    Ok(())
}
