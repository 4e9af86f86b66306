//! Headline numbers shown above the offer list.

use std::collections::HashSet;

use farecmp_core::RideOffer;
use serde::Serialize;

use crate::scorer::degeneracy;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSummary {
    /// Offers left after filtering.
    pub rides_available: usize,
    pub lowest_fare: f64,
    pub highest_fare: f64,
    pub fastest_eta: u32,
    /// Distinct providers among the rankable offers.
    pub providers_compared: usize,
    /// How much cheaper the best offer is than the worst, in whole percent.
    pub savings_percent: u32,
}

/// Summarizes the offers that can be ranked; degenerate offers are left out
/// just as the display leaves them out. `rides_available` is the size of the
/// currently displayed subset. An empty set summarizes to zeros.
#[must_use]
pub fn summarize(offers: &[RideOffer], rides_available: usize) -> ComparisonSummary {
    let offers: Vec<&RideOffer> = offers
        .iter()
        .filter(|offer| degeneracy(offer).is_none())
        .collect();

    if offers.is_empty() {
        return ComparisonSummary {
            rides_available,
            lowest_fare: 0.0,
            highest_fare: 0.0,
            fastest_eta: 0,
            providers_compared: 0,
            savings_percent: 0,
        };
    }

    let lowest_fare = offers
        .iter()
        .map(|o| o.total_fare)
        .fold(f64::INFINITY, f64::min);
    let highest_fare = offers
        .iter()
        .map(|o| o.total_fare)
        .fold(f64::NEG_INFINITY, f64::max);
    let fastest_eta = offers.iter().map(|o| o.eta_minutes).min().unwrap_or(0);
    let providers_compared = offers
        .iter()
        .map(|o| o.provider)
        .collect::<HashSet<_>>()
        .len();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let savings_percent = if highest_fare > 0.0 {
        (((highest_fare - lowest_fare) / highest_fare) * 100.0).round() as u32
    } else {
        0
    };

    ComparisonSummary {
        rides_available,
        lowest_fare,
        highest_fare,
        fastest_eta,
        providers_compared,
        savings_percent,
    }
}
