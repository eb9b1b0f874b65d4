//! Recommendations for the whole pool

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;
use venue_index::batch::recommend_all_with;
use venue_index::{SimilarityWeights, Venue};

pub fn run(
    pool: &[Venue],
    limit: usize,
    weights: &SimilarityWeights,
    output: Option<&Path>,
) -> Result<()> {
    let results = recommend_all_with(pool, limit, weights);
    let json = serde_json::to_string_pretty(&results)?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{} Wrote recommendations for {} venues to {}",
                "✓".green(),
                results.len(),
                path.display()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}
