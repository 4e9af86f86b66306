//! Stand-in for the ride-search backend: a fixed roster of drivers with fares
//! derived from a random trip distance.

use farecmp_core::{RawOffer, SearchResults};
use rand::Rng;

struct MockDriver {
    name: &'static str,
    phone: &'static str,
    vehicle_type: &'static str,
    rating: f64,
}

const MOCK_DRIVERS: [MockDriver; 5] = [
    MockDriver {
        name: "Rajesh Kumar",
        phone: "+919876543201",
        vehicle_type: "auto",
        rating: 4.2,
    },
    MockDriver {
        name: "Amit Singh",
        phone: "+919876543202",
        vehicle_type: "sedan",
        rating: 4.5,
    },
    MockDriver {
        name: "Priya Sharma",
        phone: "+919876543203",
        vehicle_type: "bike",
        rating: 4.1,
    },
    MockDriver {
        name: "Suresh Patel",
        phone: "+919876543204",
        vehicle_type: "suv",
        rating: 4.3,
    },
    MockDriver {
        name: "Kavita Joshi",
        phone: "+919876543205",
        vehicle_type: "auto",
        rating: 4.4,
    },
];

const PER_KM_RATE: f64 = 8.0;
const MIN_FARE: f64 = 15.0;
const MIN_ETA_MINUTES: i64 = 5;

fn base_rate(vehicle_type: &str) -> f64 {
    match vehicle_type {
        "bike" => 15.0,
        "auto" => 25.0,
        "sedan" => 35.0,
        "suv" => 50.0,
        _ => 30.0,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn random_uuid<R: Rng>(rng: &mut R) -> uuid::Uuid {
    uuid::Builder::from_random_bytes(rng.random()).into_uuid()
}

/// Generates one search response, cheapest offer first.
pub(crate) fn generate<R: Rng>(rng: &mut R) -> SearchResults {
    let distance_km: f64 = rng.random_range(3.0..8.0);

    #[allow(clippy::cast_possible_truncation)]
    let trip_minutes = (distance_km * 3.0).floor() as i64;

    let mut offers: Vec<RawOffer> = MOCK_DRIVERS
        .iter()
        .map(|driver| {
            let quoted = round2(base_rate(driver.vehicle_type) + distance_km * PER_KM_RATE);
            let fare = round2((quoted + rng.random_range(-5.0..10.0)).max(MIN_FARE));
            let eta = (trip_minutes + rng.random_range(-2..=5)).max(MIN_ETA_MINUTES);

            RawOffer {
                driver_id: Some(random_uuid(rng).to_string()),
                driver_name: Some(driver.name.to_owned()),
                vehicle_type: Some(driver.vehicle_type.to_owned()),
                fare: Some(fare),
                eta_minutes: u32::try_from(eta).ok(),
                rating: Some(driver.rating),
                phone: Some(driver.phone.to_owned()),
                distance_km: Some((distance_km * 10.0).round() / 10.0),
            }
        })
        .collect();

    offers.sort_by(|a, b| {
        a.fare
            .unwrap_or_default()
            .total_cmp(&b.fare.unwrap_or_default())
    });

    let search_id = random_uuid(rng).to_string();
    tracing::debug!(
        %search_id,
        offers = offers.len(),
        distance_km,
        "generated mock search results"
    );

    SearchResults {
        offers,
        search_id: Some(search_id),
    }
}
