//! Command implementations

pub mod batch;
pub mod similar;
pub mod stats;
pub mod suggest;

use anyhow::{Context, Result};
use std::path::Path;
use venue_index::{load_venues, Venue};

/// Read and validate the venue pool.
pub fn load_pool(path: &Path) -> Result<Vec<Venue>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read venue pool {}", path.display()))?;
    let pool = load_venues(&content)
        .with_context(|| format!("Invalid venue pool {}", path.display()))?;

    tracing::debug!(venues = pool.len(), path = %path.display(), "Loaded venue pool");
    Ok(pool)
}
