//! Recommendations for a whole pool at once, with optional parallelism.
//!
//! Each venue gets its own
//! [`find_similar_venues`](crate::SimilarityRecommender::find_similar_venues) call and
//! therefore its own index, so the parallel path needs no locking.

use crate::recommend::{score_candidates_with, SimilarityWeights};
use crate::Venue;
use serde::{Deserialize, Serialize};

/// A recommended venue id with its similarity score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredId {
    /// Recommended venue id
    pub id: String,
    /// Similarity score
    pub score: u32,
}

/// Recommendations for one venue of the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The venue the recommendations are for
    pub venue_id: String,
    /// Similar venues, best first
    pub similar: Vec<ScoredId>,
}

/// Computes recommendations for every venue in `pool` with default weights.
///
/// # Example
/// ```
/// use venue_index::{recommend_all, Venue};
///
/// let pool = vec![
///     Venue::new("a", "A").with_categories(["WEDDING"]),
///     Venue::new("b", "B").with_categories(["WEDDING"]),
/// ];
///
/// let results = recommend_all(&pool, 3);
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].similar[0].id, "b");
/// ```
pub fn recommend_all(pool: &[Venue], limit: usize) -> Vec<Recommendation> {
    recommend_all_with(pool, limit, &SimilarityWeights::default())
}

/// Computes recommendations for every venue in `pool`, results in pool order.
pub fn recommend_all_with(
    pool: &[Venue],
    limit: usize,
    weights: &SimilarityWeights,
) -> Vec<Recommendation> {
    tracing::debug!(venues = pool.len(), limit, "Computing recommendations for pool");

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        pool.par_iter()
            .map(|venue| recommend_one(venue, pool, limit, weights))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        pool.iter()
            .map(|venue| recommend_one(venue, pool, limit, weights))
            .collect()
    }
}

#[inline]
fn recommend_one(
    venue: &Venue,
    pool: &[Venue],
    limit: usize,
    weights: &SimilarityWeights,
) -> Recommendation {
    let mut ranked = score_candidates_with(venue, pool, weights);
    ranked.truncate(limit);

    Recommendation {
        venue_id: venue.id.clone(),
        similar: ranked
            .into_iter()
            .map(|c| ScoredId {
                id: c.item.id.clone(),
                score: c.score,
            })
            .collect(),
    }
}
