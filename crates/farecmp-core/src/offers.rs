use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::providers::Provider;
use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Bike,
    Auto,
    Economy,
    Sedan,
    Premium,
    Xl,
}

impl VehicleType {
    pub const ALL: [VehicleType; 6] = [
        VehicleType::Bike,
        VehicleType::Auto,
        VehicleType::Economy,
        VehicleType::Sedan,
        VehicleType::Premium,
        VehicleType::Xl,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleType::Bike => "bike",
            VehicleType::Auto => "auto",
            VehicleType::Economy => "economy",
            VehicleType::Sedan => "sedan",
            VehicleType::Premium => "premium",
            VehicleType::Xl => "xl",
        }
    }

    /// Human-facing name shown next to an offer, e.g. `"Sedan"`.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            VehicleType::Bike => "Bike",
            VehicleType::Auto => "Auto",
            VehicleType::Economy => "Economy",
            VehicleType::Sedan => "Sedan",
            VehicleType::Premium => "Premium",
            VehicleType::Xl => "XL",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            VehicleType::Bike => "2-wheeler",
            VehicleType::Auto => "3-wheeler",
            VehicleType::Economy => "Budget car",
            VehicleType::Sedan => "Comfort car",
            VehicleType::Premium => "Luxury car",
            VehicleType::Xl => "Large vehicle",
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = CoreError;

    /// Strict parse of a canonical vehicle id. Upstream labels such as `"suv"`
    /// go through the normalizer's lookup table instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        VehicleType::ALL
            .into_iter()
            .find(|v| v.as_str() == lower)
            .ok_or_else(|| CoreError::UnknownVehicleType(s.to_string()))
    }
}

/// Which vehicle types the results view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VehicleFilter {
    #[default]
    All,
    Only(VehicleType),
}

impl VehicleFilter {
    #[must_use]
    pub fn matches(self, vehicle_type: VehicleType) -> bool {
        match self {
            VehicleFilter::All => true,
            VehicleFilter::Only(wanted) => wanted == vehicle_type,
        }
    }
}

impl std::fmt::Display for VehicleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleFilter::All => f.write_str("all"),
            VehicleFilter::Only(v) => write!(f, "{v}"),
        }
    }
}

impl FromStr for VehicleFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(VehicleFilter::All)
        } else {
            s.parse().map(VehicleFilter::Only)
        }
    }
}

/// A user-selectable ordering criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Price,
    Distance,
    Eta,
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Price, SortKey::Distance, SortKey::Eta, SortKey::Rating];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Distance => "distance",
            SortKey::Eta => "eta",
            SortKey::Rating => "rating",
        }
    }

    /// Compares two offers on this key alone.
    ///
    /// Price, distance and ETA are ascending; rating is descending.
    #[must_use]
    pub fn compare(self, a: &RideOffer, b: &RideOffer) -> Ordering {
        match self {
            SortKey::Price => a.total_fare.total_cmp(&b.total_fare),
            SortKey::Distance => a.distance_km.total_cmp(&b.distance_km),
            SortKey::Eta => a.eta_minutes.cmp(&b.eta_minutes),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == lower)
            .ok_or_else(|| CoreError::UnknownSortKey(s.to_string()))
    }
}

/// A single ride option from one provider, normalized for comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideOffer {
    /// `<provider-slug>-<driver_id>`, stable for the lifetime of a search.
    pub id: String,
    pub provider: Provider,
    pub vehicle_type: VehicleType,
    /// Display name of the vehicle class, e.g. `"Sedan"`.
    pub vehicle_name: String,
    pub driver_name: Option<String>,
    /// Driver rating in `(0, 5]`.
    pub rating: f64,
    pub distance_km: f64,
    pub eta_minutes: u32,
    pub base_fare: f64,
    pub total_fare: f64,
    /// Present only when the fare was inflated above the base fare.
    pub surge_multiplier: Option<f64>,
    /// Opaque app URI for the external hand-off.
    pub deep_link: String,
    /// Provider website fallback for the hand-off.
    pub booking_link: String,
}

impl RideOffer {
    /// Total fare rounded to the nearest whole currency unit for display.
    ///
    /// Scoring always uses the unrounded `total_fare`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn display_fare(&self) -> i64 {
        self.total_fare.round() as i64
    }

    #[must_use]
    pub fn has_surge(&self) -> bool {
        self.surge_multiplier.is_some_and(|m| m > 1.0)
    }
}

#[cfg(test)]
#[path = "offers_test.rs"]
mod tests;
