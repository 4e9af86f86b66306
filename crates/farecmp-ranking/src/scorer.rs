//! Weighted value scoring over a full offer set.
//!
//! Each component compares an offer to the best value in the set, so every
//! component lies in `(0, 1]` and the blended score is bounded by the weights.

use farecmp_core::{RideOffer, ScoreWeights};
use serde::Serialize;

use crate::error::RankingError;

/// Set-wide aggregates, computed once per ranking pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OfferStats {
    pub min_fare: f64,
    pub max_rating: f64,
    pub min_eta: u32,
}

impl OfferStats {
    /// Returns `None` for an empty set.
    #[must_use]
    pub fn collect<'a, I>(offers: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a RideOffer>,
    {
        offers.into_iter().fold(None, |acc: Option<Self>, offer| {
            Some(match acc {
                None => Self {
                    min_fare: offer.total_fare,
                    max_rating: offer.rating,
                    min_eta: offer.eta_minutes,
                },
                Some(stats) => Self {
                    min_fare: stats.min_fare.min(offer.total_fare),
                    max_rating: stats.max_rating.max(offer.rating),
                    min_eta: stats.min_eta.min(offer.eta_minutes),
                },
            })
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueScore {
    pub price: f64,
    pub rating: f64,
    pub eta: f64,
    /// Weighted blend of the three components.
    pub value: f64,
}

impl ValueScore {
    #[must_use]
    pub fn compute(offer: &RideOffer, stats: &OfferStats, weights: &ScoreWeights) -> Self {
        let price = stats.min_fare / offer.total_fare;
        let rating = offer.rating / stats.max_rating;
        let eta = f64::from(stats.min_eta) / f64::from(offer.eta_minutes);
        Self {
            price,
            rating,
            eta,
            value: weights.price * price + weights.rating * rating + weights.eta * eta,
        }
    }
}

/// An offer paired with its score and flags. Borrows the offer; the offer
/// set itself is never modified.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoredOffer<'a> {
    pub offer: &'a RideOffer,
    pub score: ValueScore,
    /// Value score beats the recommend threshold times the set mean.
    pub recommended: bool,
    /// Highest value score in the set.
    pub top_choice: bool,
}

#[derive(Debug, Clone)]
pub struct Ranking<'a> {
    /// Scored offers in input order.
    pub scored: Vec<ScoredOffer<'a>>,
    pub average_value: f64,
}

impl<'a> Ranking<'a> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scored.is_empty()
    }

    pub fn recommended(&self) -> impl Iterator<Item = &ScoredOffer<'a>> {
        self.scored.iter().filter(|s| s.recommended)
    }

    #[must_use]
    pub fn top_choice(&self) -> Option<&ScoredOffer<'a>> {
        self.scored.iter().find(|s| s.top_choice)
    }
}

/// Reason an offer would break the score denominators, if any.
#[must_use]
pub fn degeneracy(offer: &RideOffer) -> Option<&'static str> {
    if !offer.total_fare.is_finite() || offer.total_fare <= 0.0 {
        Some("total fare must be positive")
    } else if offer.eta_minutes == 0 {
        Some("eta must be at least one minute")
    } else if !offer.rating.is_finite() || offer.rating <= 0.0 {
        Some("rating must be positive")
    } else {
        None
    }
}

/// Scores every offer against the whole set and flags recommended and top-choice offers.
///
/// An empty set yields an empty ranking.
///
/// # Errors
///
/// Returns [`RankingError::DegenerateInput`] if any offer has a non-positive
/// fare, a zero ETA or a non-positive rating.
pub fn rank_offers<'a, I>(offers: I, weights: &ScoreWeights) -> Result<Ranking<'a>, RankingError>
where
    I: IntoIterator<Item = &'a RideOffer>,
{
    let offers: Vec<&'a RideOffer> = offers.into_iter().collect();

    if let Some((offer, reason)) = offers
        .iter()
        .find_map(|o| degeneracy(o).map(|reason| (o, reason)))
    {
        return Err(RankingError::DegenerateInput(format!(
            "offer {}: {reason}",
            offer.id
        )));
    }

    let Some(stats) = OfferStats::collect(offers.iter().copied()) else {
        return Ok(Ranking {
            scored: Vec::new(),
            average_value: 0.0,
        });
    };

    let scores: Vec<ValueScore> = offers
        .iter()
        .map(|o| ValueScore::compute(o, &stats, weights))
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let average_value = scores.iter().map(|s| s.value).sum::<f64>() / scores.len() as f64;
    let cutoff = weights.recommend_threshold * average_value;

    let mut top_idx = 0;
    for (idx, score) in scores.iter().enumerate() {
        if score.value > scores[top_idx].value {
            top_idx = idx;
        }
    }

    let scored: Vec<ScoredOffer<'a>> = offers
        .into_iter()
        .zip(scores)
        .enumerate()
        .map(|(idx, (offer, score))| ScoredOffer {
            offer,
            score,
            recommended: score.value > cutoff,
            top_choice: idx == top_idx,
        })
        .collect();

    tracing::debug!(
        offers = scored.len(),
        recommended = scored.iter().filter(|s| s.recommended).count(),
        average_value,
        "ranked offers"
    );

    Ok(Ranking {
        scored,
        average_value,
    })
}

#[cfg(test)]
#[path = "scorer_test.rs"]
mod tests;
