//! WASM bindings for venue typeahead and recommendations.

use wasm_bindgen::prelude::*;

/// Prefix search over a venue pool.
///
/// # Arguments
/// * `pool_json` - JSON array of venues
/// * `prefix` - Typed prefix
///
/// # Returns
/// JSON object `{"ids": [...], "suggestions": [...]}`; both empty on bad input
#[wasm_bindgen]
pub fn suggest(pool_json: &str, prefix: &str) -> String {
    use serde::Serialize;

    #[derive(Serialize, Default)]
    struct Suggestions {
        ids: Vec<String>,
        suggestions: Vec<String>,
    }

    let result = match crate::load_venues(pool_json) {
        Ok(pool) => {
            let index = crate::build_venue_index(&pool);
            let found = index.search(prefix);
            Suggestions {
                ids: found.entities.iter().map(|v| v.id.clone()).collect(),
                suggestions: found.suggestions,
            }
        }
        Err(_) => Suggestions::default(),
    };

    serde_json::to_string(&result).unwrap_or_else(|_| r#"{"ids":[],"suggestions":[]}"#.to_string())
}

/// Similar venues for the venue with `target_id`.
///
/// # Arguments
/// * `target_id` - Id of a venue in the pool
/// * `pool_json` - JSON array of venues
/// * `limit` - Maximum results
///
/// # Returns
/// JSON array of venue ids, best match first; `[]` if the target is unknown
#[wasm_bindgen]
pub fn similar_venues(target_id: &str, pool_json: &str, limit: usize) -> String {
    let pool = match crate::load_venues(pool_json) {
        Ok(pool) => pool,
        Err(_) => return "[]".to_string(),
    };
    let Some(target) = pool.iter().find(|v| v.id == target_id) else {
        return "[]".to_string();
    };

    let ids: Vec<&str> = crate::SimilarityRecommender::find_similar_venues(target, &pool, limit)
        .into_iter()
        .map(|v| v.id.as_str())
        .collect();

    serde_json::to_string(&ids).unwrap_or_else(|_| "[]".to_string())
}
