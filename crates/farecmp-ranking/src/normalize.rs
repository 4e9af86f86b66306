//! Normalization from raw search-result records to [`RideOffer`]s.
//!
//! Providers are assigned round-robin by record position and fares get a
//! bounded random adjustment drawn from the caller's RNG, so a seeded RNG
//! makes the whole pass reproducible.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use farecmp_core::{Provider, ProviderCatalog, RawOffer, RideOffer, VehicleType};
use rand::Rng;

use crate::error::RankingError;

/// Bounds of the multiplier applied to the upstream fare.
pub const FARE_ADJUSTMENT: RangeInclusive<f64> = 0.9..=1.2;

/// Highest rating a driver can carry.
pub const MAX_RATING: f64 = 5.0;

/// Maps an upstream vehicle label onto the canonical set.
///
/// Matching is case-insensitive. Unrecognized labels fall back to
/// [`VehicleType::Economy`].
#[must_use]
pub fn map_vehicle_type(label: &str) -> VehicleType {
    match label.trim().to_ascii_lowercase().as_str() {
        "bike" | "moto" => VehicleType::Bike,
        "auto" | "rickshaw" => VehicleType::Auto,
        "sedan" | "prime" => VehicleType::Sedan,
        "premium" | "luxury" => VehicleType::Premium,
        "suv" | "xl" => VehicleType::Xl,
        _ => VehicleType::Economy,
    }
}

/// Normalizes every raw offer, failing the whole batch on the first invalid record.
///
/// Driver ids must be unique across the batch; offer ids are built from them.
///
/// # Errors
///
/// Returns [`RankingError::Validation`] naming the record index and field when a
/// required field is missing or out of range, or when a driver id repeats.
pub fn normalize_offers<R: Rng>(
    raw: &[RawOffer],
    catalog: &ProviderCatalog,
    rng: &mut R,
) -> Result<Vec<RideOffer>, RankingError> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut offers = Vec::with_capacity(raw.len());
    for (index, record) in raw.iter().enumerate() {
        let offer = normalize_offer(record, index, catalog, rng)?;
        if let Some(driver_id) = record.driver_id.as_deref().map(str::trim) {
            if let Some(first) = seen.insert(driver_id, index) {
                return Err(RankingError::Validation {
                    index,
                    field: "driver_id",
                    reason: format!("repeats record {first}"),
                });
            }
        }
        offers.push(offer);
    }

    tracing::debug!(count = offers.len(), "normalized offers");
    Ok(offers)
}

fn normalize_offer<R: Rng>(
    raw: &RawOffer,
    index: usize,
    catalog: &ProviderCatalog,
    rng: &mut R,
) -> Result<RideOffer, RankingError> {
    let invalid = |field: &'static str, reason: String| RankingError::Validation {
        index,
        field,
        reason,
    };
    let missing = |field: &'static str| invalid(field, "is missing".to_string());

    let driver_id = raw
        .driver_id
        .as_deref()
        .map(str::trim)
        .ok_or_else(|| missing("driver_id"))?;
    if driver_id.is_empty() {
        return Err(invalid("driver_id", "is empty".to_string()));
    }

    let vehicle_label = raw.vehicle_type.as_deref().ok_or_else(|| missing("vehicle_type"))?;

    let base_fare = raw.fare.ok_or_else(|| missing("fare"))?;
    if !base_fare.is_finite() || base_fare < 0.0 {
        return Err(invalid("fare", format!("must be a non-negative amount, got {base_fare}")));
    }

    let eta_minutes = raw.eta_minutes.ok_or_else(|| missing("eta_minutes"))?;

    let rating = raw.rating.ok_or_else(|| missing("rating"))?;
    if !rating.is_finite() || rating <= 0.0 || rating > MAX_RATING {
        return Err(invalid("rating", format!("must be in (0, {MAX_RATING}], got {rating}")));
    }

    let distance_km = raw.distance_km.unwrap_or(0.0);
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(invalid(
            "distance_km",
            format!("must be a non-negative distance, got {distance_km}"),
        ));
    }

    let provider = Provider::for_position(index);
    let links = catalog.get(provider);
    let vehicle_type = map_vehicle_type(vehicle_label);

    let factor = rng.random_range(FARE_ADJUSTMENT);
    let total_fare = base_fare * factor;
    let surge_multiplier = (factor > 1.0).then_some(factor);

    Ok(RideOffer {
        id: format!("{}-{}", provider.slug(), driver_id),
        provider,
        vehicle_type,
        vehicle_name: vehicle_type.display_name().to_string(),
        driver_name: raw.driver_name.clone().filter(|s| !s.trim().is_empty()),
        rating,
        distance_km,
        eta_minutes,
        base_fare,
        total_fare,
        surge_multiplier,
        deep_link: links.deep_link.clone(),
        booking_link: links.booking_link.clone(),
    })
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
