//! Index statistics

use anyhow::Result;
use owo_colors::OwoColorize;
use venue_index::{build_venue_index, Venue};

pub fn run(pool: &[Venue], json: bool) -> Result<()> {
    let index = build_venue_index(pool);

    if json {
        let output = serde_json::json!({
            "venues": pool.len(),
            "indexed_venues": index.entity_count(),
            "nodes": index.node_count(),
            "tokens": index.token_count(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Index statistics".bold());
    println!("  Venues:  {}", pool.len());
    println!("  Indexed: {}", index.entity_count());
    println!("  Nodes:   {}", index.node_count());
    println!("  Tokens:  {}", index.token_count());

    Ok(())
}
