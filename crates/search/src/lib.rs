//! Prefix indexing and venue similarity for the venue marketplace.
//!
//! This crate provides:
//! - A character trie over venue names, locations, categories and services
//! - Prefix search with typeahead completions
//! - Weighted cross-field similarity recommendations
//! - Batch recommendations with optional parallelism
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use venue_index::{build_venue_index, SimilarityRecommender, Venue};
//!
//! let pool = vec![
//!     Venue::new("1", "Lakeside Banquet").with_categories(["WEDDING"]).with_city("Pokhara"),
//!     Venue::new("2", "Fewa Palace").with_categories(["WEDDING"]).with_city("Pokhara"),
//! ];
//!
//! let index = build_venue_index(&pool);
//! assert_eq!(index.search("lake").suggestions, vec!["lakeside banquet"]);
//!
//! let similar = SimilarityRecommender::find_similar_venues(&pool[0], &pool, 3);
//! assert_eq!(similar[0].id, "2");
//! ```

mod entity;
mod error;
mod trie;
mod venue;
pub mod batch;
pub mod recommend;

#[cfg(feature = "wasm")]
mod wasm;

pub use batch::{recommend_all, Recommendation, ScoredId};
pub use entity::{fold_case, Entity};
pub use error::{Result, SearchError, SearchErrorCode};
pub use recommend::{
    build_venue_index, score_candidates, SimilarityRecommender, SimilarityWeights, DEFAULT_LIMIT,
};
pub use trie::{PrefixIndex, PrefixMatch, DEFAULT_SUGGESTION_LIMIT};
pub use venue::{load_venues, Venue, VenueField, VenueService};

/// A candidate with the score it accumulated during one recommendation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ScoredCandidate<T> {
    /// The candidate
    pub item: T,
    /// Similarity score (higher is better)
    pub score: u32,
}
