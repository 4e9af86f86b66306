//! Filtering and ordering of scored offers for display.

use std::cmp::Ordering;

use farecmp_core::{RideOffer, ScoreWeights, SortKey, VehicleFilter};

use crate::scorer::{degeneracy, rank_offers, Ranking, ScoredOffer};

/// What the user currently has selected in the results view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub vehicle_filter: VehicleFilter,
    /// Sort keys in priority order. Empty means "cheapest first".
    pub sort_keys: Vec<SortKey>,
}

/// Display comparator.
///
/// 1. Recommended offers first.
/// 2. `sort_keys` in order; the first key that tells the offers apart decides.
/// 3. Cheapest total fare.
#[must_use]
pub fn compare_offers(a: &ScoredOffer<'_>, b: &ScoredOffer<'_>, sort_keys: &[SortKey]) -> Ordering {
    b.recommended
        .cmp(&a.recommended)
        .then_with(|| {
            sort_keys
                .iter()
                .map(|key| key.compare(a.offer, b.offer))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| SortKey::Price.compare(a.offer, b.offer))
}

/// Filters a ranking by vehicle type and orders it for display.
///
/// Recommendation flags come from the ranking, which covers the unfiltered
/// set, so the filter only changes which offers are shown. The sort is stable.
#[must_use]
pub fn arrange<'a>(ranking: &Ranking<'a>, query: &ViewQuery) -> Vec<ScoredOffer<'a>> {
    let mut shown: Vec<ScoredOffer<'a>> = ranking
        .scored
        .iter()
        .filter(|s| query.vehicle_filter.matches(s.offer.vehicle_type))
        .copied()
        .collect();
    shown.sort_by(|a, b| compare_offers(a, b, &query.sort_keys));
    shown
}

/// Ranks and arranges `offers` for rendering.
///
/// Offers that would break the score denominators are dropped with a warning
/// before ranking, so this never fails; an empty result is the empty state.
#[must_use]
pub fn build_display<'a>(
    offers: &'a [RideOffer],
    weights: &ScoreWeights,
    query: &ViewQuery,
) -> Vec<ScoredOffer<'a>> {
    let usable: Vec<&'a RideOffer> = offers
        .iter()
        .filter(|offer| match degeneracy(offer) {
            Some(reason) => {
                tracing::warn!(offer = %offer.id, reason, "excluding offer from ranking");
                false
            }
            None => true,
        })
        .collect();

    match rank_offers(usable, weights) {
        Ok(ranking) => arrange(&ranking, query),
        Err(e) => {
            tracing::warn!(error = %e, "ranking failed; showing no offers");
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
