//! Weighted cross-field similarity between venues.
//!
//! A recommendation builds a fresh [`PrefixIndex`] over the candidate pool,
//! queries it with the target's categories, city and service names, and
//! ranks candidates by the summed weights of their matches. The index lives
//! only for the duration of the call, so concurrent calls share nothing.

use crate::{PrefixIndex, ScoredCandidate, Venue, VenueField};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of recommendations returned when the caller has no preference.
pub const DEFAULT_LIMIT: usize = 3;

/// Target fields queried during ranking, in query order.
const SCORED_FIELDS: [VenueField; 3] =
    [VenueField::Category, VenueField::City, VenueField::Service];

/// Score awarded per matching field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityWeights {
    /// Per matching category
    pub category: u32,
    /// For a matching city
    pub city: u32,
    /// Per matching service
    pub service: u32,
}

impl SimilarityWeights {
    /// Weight awarded for a match on `field`; name and province never score.
    pub fn for_field(&self, field: VenueField) -> Option<u32> {
        match field {
            VenueField::Category => Some(self.category),
            VenueField::City => Some(self.city),
            VenueField::Service => Some(self.service),
            VenueField::Name | VenueField::Province => None,
        }
    }
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            category: 3,
            city: 2,
            service: 1,
        }
    }
}

/// Venue index plus similarity scoring over it.
///
/// Construct one per recommendation; [`find_similar_venues`](Self::find_similar_venues)
/// does exactly that.
#[derive(Debug, Default)]
pub struct SimilarityRecommender<'a> {
    index: PrefixIndex<'a, Venue>,
}

impl<'a> SimilarityRecommender<'a> {
    /// Creates a recommender over an empty index.
    pub fn new() -> Self {
        Self {
            index: PrefixIndex::new(),
        }
    }

    /// Registers every indexable field of `venue`: name, city, province,
    /// categories (or the legacy category) and service names. Blank values are
    /// skipped.
    pub fn index_venue(&mut self, venue: &'a Venue) {
        for (_, value) in venue.indexable_fields() {
            self.index.insert_folded(&crate::fold_case(value), venue);
        }
    }

    /// Indexes every venue in `pool`.
    pub fn index_venues(&mut self, pool: &'a [Venue]) {
        for venue in pool {
            self.index_venue(venue);
        }
    }

    /// Read-only access to the underlying index, e.g. for typeahead.
    pub fn index(&self) -> &PrefixIndex<'a, Venue> {
        &self.index
    }

    /// Consumes the recommender, returning the index.
    pub fn into_index(self) -> PrefixIndex<'a, Venue> {
        self.index
    }

    /// Scores every venue in the index against `target`, best first.
    ///
    /// Candidates that never match keep no entry. Ties keep the order in which
    /// candidates were first matched.
    pub fn rank(
        &self,
        target: &Venue,
        weights: &SimilarityWeights,
    ) -> Vec<ScoredCandidate<&'a Venue>> {
        let mut scored: Vec<ScoredCandidate<&'a Venue>> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        let mut award = |token: &str, weight: u32| {
            for venue in self.index.search(token).entities {
                if venue.id == target.id {
                    continue;
                }
                match positions.get(venue.id.as_str()) {
                    Some(&pos) => scored[pos].score = scored[pos].score.saturating_add(weight),
                    None => {
                        positions.insert(venue.id.as_str(), scored.len());
                        scored.push(ScoredCandidate {
                            item: venue,
                            score: weight,
                        });
                    }
                }
            }
        };

        // Blank values are already dropped here; an empty query would match
        // the root and with it every indexed venue.
        let fields = target.indexable_fields();
        for kind in SCORED_FIELDS {
            let Some(weight) = weights.for_field(kind) else {
                continue;
            };
            for &(_, value) in fields.iter().filter(|(field, _)| *field == kind) {
                award(value, weight);
            }
        }

        // Stable: equal scores stay in encounter order.
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }

    /// Up to `limit` venues from `pool` most similar to `target`, scored with
    /// the default weights.
    ///
    /// # Example
    /// ```
    /// use venue_index::{SimilarityRecommender, Venue};
    ///
    /// let target = Venue::new("t", "Target").with_categories(["WEDDING"]).with_city("Pokhara");
    /// let pool = vec![
    ///     target.clone(),
    ///     Venue::new("x", "X").with_categories(["WEDDING"]).with_city("Pokhara"),
    ///     Venue::new("y", "Y").with_categories(["WEDDING"]),
    ///     Venue::new("z", "Z"),
    /// ];
    ///
    /// let similar = SimilarityRecommender::find_similar_venues(&target, &pool, 2);
    /// let ids: Vec<&str> = similar.iter().map(|v| v.id.as_str()).collect();
    /// assert_eq!(ids, vec!["x", "y"]);
    /// ```
    pub fn find_similar_venues<'p>(
        target: &Venue,
        pool: &'p [Venue],
        limit: usize,
    ) -> Vec<&'p Venue> {
        Self::find_similar_venues_with(target, pool, limit, &SimilarityWeights::default())
    }

    /// Like [`find_similar_venues`](Self::find_similar_venues) with custom weights.
    pub fn find_similar_venues_with<'p>(
        target: &Venue,
        pool: &'p [Venue],
        limit: usize,
        weights: &SimilarityWeights,
    ) -> Vec<&'p Venue> {
        if limit == 0 {
            return Vec::new();
        }
        let mut ranked = score_candidates_with(target, pool, weights);
        ranked.truncate(limit);
        ranked.into_iter().map(|c| c.item).collect()
    }
}

/// Full ranking of `pool` against `target` with default weights, scores kept.
pub fn score_candidates<'p>(
    target: &Venue,
    pool: &'p [Venue],
) -> Vec<ScoredCandidate<&'p Venue>> {
    score_candidates_with(target, pool, &SimilarityWeights::default())
}

/// Full ranking of `pool` against `target` with custom weights.
pub fn score_candidates_with<'p>(
    target: &Venue,
    pool: &'p [Venue],
    weights: &SimilarityWeights,
) -> Vec<ScoredCandidate<&'p Venue>> {
    let _span =
        tracing::debug_span!("score_candidates", target = %target.id, pool = pool.len()).entered();

    let mut recommender = SimilarityRecommender::new();
    recommender.index_venues(pool);
    let ranked = recommender.rank(target, weights);

    tracing::debug!(
        nodes = recommender.index().node_count(),
        candidates = ranked.len(),
        "Ranked similar venues"
    );
    ranked
}

/// Builds a typeahead index over `pool` without scoring anything.
pub fn build_venue_index(pool: &[Venue]) -> PrefixIndex<'_, Venue> {
    let mut recommender = SimilarityRecommender::new();
    recommender.index_venues(pool);
    tracing::debug!(
        venues = pool.len(),
        nodes = recommender.index().node_count(),
        "Built venue index"
    );
    recommender.into_index()
}
