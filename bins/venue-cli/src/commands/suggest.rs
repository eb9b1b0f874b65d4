//! Typeahead over the pool

use anyhow::Result;
use owo_colors::OwoColorize;
use venue_index::{build_venue_index, Venue};

pub fn run(pool: &[Venue], prefix: &str, limit: usize, json: bool) -> Result<()> {
    let index = build_venue_index(pool).with_suggestion_limit(limit);

    let found = index.search(prefix);

    if json {
        let output = serde_json::json!({
            "prefix": prefix,
            "suggestions": found.suggestions,
            "venues": found.entities.iter().map(|v| serde_json::json!({
                "id": v.id,
                "name": v.name,
            })).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if found.is_empty() {
        println!("{} No matches for \"{}\"", "ℹ".blue(), prefix);
        return Ok(());
    }

    println!("{}", "Suggestions".bold());
    for suggestion in &found.suggestions {
        println!("  {}", suggestion);
    }

    println!();
    println!("{} ({})", "Venues".bold(), found.entities.len());
    for venue in &found.entities {
        println!("  {} {}", venue.id.dimmed(), venue.name);
    }

    Ok(())
}
