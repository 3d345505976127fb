//! Role command implementation.

use eventkit_core::{Role, Tier};
use serde_json::json;

use crate::output::format_json;

const TIERS: [Tier; 6] = [
    Tier::Banned,
    Tier::Anonymous,
    Tier::Normal,
    Tier::Developer,
    Tier::Admin,
    Tier::Superuser,
];

pub fn run(rank: String, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let role: Role = rank
        .parse()
        .map_err(|e| format!("Invalid rank {:?}: {}", rank, e))?;

    if json_output {
        let satisfies: serde_json::Map<String, serde_json::Value> = TIERS
            .iter()
            .map(|tier| (tier.as_str().to_string(), json!(role.satisfies(*tier))))
            .collect();
        let output = json!({
            "rank": role.rank(),
            "tier": role.tier(),
            "satisfies": satisfies,
        });
        println!("{}", format_json(&output));
    } else {
        println!("rank  {}", role);
        println!("tier  {}", role.tier());
        for tier in TIERS {
            println!("  {:<10} {}", tier.as_str(), role.satisfies(tier));
        }
    }
    Ok(())
}
