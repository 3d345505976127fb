//! Canonicalize command implementation.

use eventkit_canonical::Canonicalizer;

use super::read_event;

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let event = read_event(input)?;

    let canonicalizer = Canonicalizer::default();
    let result = canonicalizer.canonicalize(&event.signed_fields());

    println!("{}", String::from_utf8_lossy(&result.bytes));
    println!("{}", result.signature);
    Ok(())
}
