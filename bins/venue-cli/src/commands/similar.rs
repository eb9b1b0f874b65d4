//! Similar venues for one venue

use anyhow::{bail, Result};
use owo_colors::OwoColorize;
use venue_index::recommend::score_candidates_with;
use venue_index::{SimilarityWeights, Venue};

pub fn run(
    pool: &[Venue],
    venue_id: &str,
    limit: usize,
    weights: &SimilarityWeights,
    json: bool,
    show_scores: bool,
) -> Result<()> {
    let Some(target) = pool.iter().find(|v| v.id == venue_id) else {
        bail!("Venue '{}' not found in pool", venue_id);
    };

    let mut ranked = score_candidates_with(target, pool, weights);
    ranked.truncate(limit);

    if json {
        let output: Vec<_> = ranked
            .iter()
            .map(|c| {
                if show_scores {
                    serde_json::json!({ "id": c.item.id, "name": c.item.name, "score": c.score })
                } else {
                    serde_json::json!({ "id": c.item.id, "name": c.item.name })
                }
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} {}", "Similar to".bold(), target.name.bold());
    if ranked.is_empty() {
        println!("  {}", "no similar venues".dimmed());
        return Ok(());
    }

    for (rank, candidate) in ranked.iter().enumerate() {
        let place = candidate.item.city.as_deref().unwrap_or("-");
        if show_scores {
            println!(
                "  {}. {} {} ({}) {}",
                rank + 1,
                candidate.item.name,
                candidate.item.id.dimmed(),
                place,
                format!("score {}", candidate.score).green()
            );
        } else {
            println!(
                "  {}. {} {} ({})",
                rank + 1,
                candidate.item.name,
                candidate.item.id.dimmed(),
                place
            );
        }
    }

    Ok(())
}
