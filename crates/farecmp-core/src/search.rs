//! Wire shapes exchanged with the external ride-search call.
//!
//! Required fields on [`RawOffer`] are modelled as `Option` so a missing field
//! surfaces as a normalization error naming the field, rather than as an
//! opaque deserialization failure for the whole response.

use serde::{Deserialize, Serialize};

/// Response body of the ride-search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub offers: Vec<RawOffer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_id: Option<String>,
}

/// One driver offer exactly as the search endpoint returns it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawOffer {
    pub driver_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_name: Option<String>,
    /// Upstream label such as `"auto"` or `"suv"`.
    pub vehicle_type: Option<String>,
    pub fare: Option<f64>,
    pub eta_minutes: Option<u32>,
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

/// What the user searched for. Stored alongside the results so the results
/// view can show the route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchData {
    pub pickup_address: String,
    pub pickup_lat: f64,
    pub pickup_lng: f64,
    #[serde(default)]
    pub drop_address: Option<String>,
    #[serde(default)]
    pub drop_lat: Option<f64>,
    #[serde(default)]
    pub drop_lng: Option<f64>,
    /// Requested ride type; `"any"` when unset upstream.
    #[serde(default)]
    pub ride_type: Option<String>,
}

impl SearchData {
    /// One-line route label, e.g. `"MG Road → Airport"`.
    #[must_use]
    pub fn route_label(&self) -> String {
        match self.drop_address.as_deref().filter(|s| !s.is_empty()) {
            Some(drop) => format!("{} → {}", self.pickup_address, drop),
            None => self.pickup_address.clone(),
        }
    }
}
