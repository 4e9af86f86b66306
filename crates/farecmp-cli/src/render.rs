//! Plain-text rendering of the results screen.

use farecmp_core::{SearchData, VehicleFilter};
use farecmp_ranking::{ComparisonSummary, ScoredOffer};

/// Line naming the vehicle type the list is narrowed to, if any.
pub(crate) fn filter_line(filter: VehicleFilter) -> Option<String> {
    match filter {
        VehicleFilter::All => None,
        VehicleFilter::Only(vehicle) => Some(format!(
            "showing {} only ({})",
            vehicle.display_name(),
            vehicle.description()
        )),
    }
}

pub(crate) fn print_header(
    search: &SearchData,
    summary: &ComparisonSummary,
    filter: VehicleFilter,
) {
    println!("{}", search.route_label());
    if let Some(line) = filter_line(filter) {
        println!("{line}");
    }
    println!(
        "{} rides available · best ₹{:.0} · fastest {} min · {} apps compared",
        summary.rides_available,
        summary.lowest_fare,
        summary.fastest_eta,
        summary.providers_compared
    );
    if summary.savings_percent > 0 {
        println!(
            "Save up to {}% by choosing the best option",
            summary.savings_percent
        );
    }
    println!();
}

fn tags(shown: &ScoredOffer<'_>) -> String {
    let mut tags = Vec::new();
    if shown.top_choice {
        tags.push("TOP CHOICE".to_owned());
    }
    if shown.recommended {
        tags.push("RECOMMENDED".to_owned());
    }
    if let Some(multiplier) = shown.offer.surge_multiplier.filter(|m| *m > 1.0) {
        tags.push(format!("{multiplier:.1}x SURGE"));
    }
    tags.join(", ")
}

/// Formats one offer as a table row matching [`print_offers`] columns.
pub(crate) fn offer_row(shown: &ScoredOffer<'_>) -> String {
    let offer = shown.offer;
    let fare = if offer.has_surge() {
        format!("₹{} (₹{:.0})", offer.display_fare(), offer.base_fare)
    } else {
        format!("₹{}", offer.display_fare())
    };
    let eta = format!("{} min", offer.eta_minutes);
    let rating = format!("{:.1}", offer.rating);
    let distance = format!("{:.1} km", offer.distance_km);
    format!(
        "{:<28}{:<12}{:<10}{:<16}{:<8}{:<8}{:<8}{}",
        offer.id,
        offer.provider.name(),
        offer.vehicle_name,
        fare,
        eta,
        rating,
        distance,
        tags(shown)
    )
}

/// Message shown when the displayed list is empty.
pub(crate) fn empty_message(filter: VehicleFilter) -> &'static str {
    match filter {
        VehicleFilter::All => "no rides can be compared for this search",
        VehicleFilter::Only(_) => "no rides available for this vehicle type; try `--vehicle all`",
    }
}

pub(crate) fn print_offers(offers: &[ScoredOffer<'_>], filter: VehicleFilter) {
    if offers.is_empty() {
        println!("{}", empty_message(filter));
        return;
    }

    println!(
        "{:<28}{:<12}{:<10}{:<16}{:<8}{:<8}{:<8}TAGS",
        "OFFER", "APP", "VEHICLE", "FARE", "ETA", "RATING", "DIST"
    );
    for shown in offers {
        println!("{}", offer_row(shown));
    }
}
