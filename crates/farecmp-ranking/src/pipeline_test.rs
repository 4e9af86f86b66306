use farecmp_core::{Provider, VehicleType};

use super::*;

fn make_offer(id: &str, vehicle: VehicleType, fare: f64, eta: u32, rating: f64) -> RideOffer {
    RideOffer {
        id: id.to_owned(),
        provider: Provider::Ola,
        vehicle_type: vehicle,
        vehicle_name: vehicle.display_name().to_owned(),
        driver_name: None,
        rating,
        distance_km: 5.0,
        eta_minutes: eta,
        base_fare: fare,
        total_fare: fare,
        surge_multiplier: None,
        deep_link: "olacabs://app/launch".to_owned(),
        booking_link: "https://book.olacabs.com/".to_owned(),
    }
}

fn abc() -> Vec<RideOffer> {
    vec![
        make_offer("A", VehicleType::Auto, 100.0, 10, 4.0),
        make_offer("B", VehicleType::Sedan, 120.0, 8, 4.8),
        make_offer("C", VehicleType::Economy, 90.0, 15, 3.5),
    ]
}

fn abcd() -> Vec<RideOffer> {
    let mut offers = abc();
    offers.push(make_offer("D", VehicleType::Bike, 50.0, 4, 5.0));
    offers
}

fn ids(shown: &[ScoredOffer<'_>]) -> Vec<String> {
    shown.iter().map(|s| s.offer.id.clone()).collect()
}

fn query(filter: VehicleFilter, keys: &[SortKey]) -> ViewQuery {
    ViewQuery {
        vehicle_filter: filter,
        sort_keys: keys.to_vec(),
    }
}

#[test]
fn rating_sort_orders_b_a_c() {
    let offers = abc();
    let ranking = rank_offers(&offers, &ScoreWeights::default()).unwrap();
    let shown = arrange(&ranking, &query(VehicleFilter::All, &[SortKey::Rating]));
    assert_eq!(ids(&shown), vec!["B", "A", "C"]);
}

#[test]
fn no_sort_keys_falls_back_to_cheapest_first() {
    let offers = abc();
    let ranking = rank_offers(&offers, &ScoreWeights::default()).unwrap();
    let shown = arrange(&ranking, &ViewQuery::default());
    assert_eq!(ids(&shown), vec!["C", "A", "B"]);
}

#[test]
fn eta_sort_is_ascending() {
    let offers = abc();
    let ranking = rank_offers(&offers, &ScoreWeights::default()).unwrap();
    let shown = arrange(&ranking, &query(VehicleFilter::All, &[SortKey::Eta]));
    assert_eq!(ids(&shown), vec!["B", "A", "C"]);
}

#[test]
fn recommended_offer_leads_under_every_sort_key() {
    let offers = abcd();
    let ranking = rank_offers(&offers, &ScoreWeights::default()).unwrap();

    for key in SortKey::ALL {
        let shown = arrange(&ranking, &query(VehicleFilter::All, &[key]));
        assert_eq!(shown[0].offer.id, "D", "sort key {key}");
        let first_plain = shown.iter().position(|s| !s.recommended).unwrap();
        assert!(
            shown[first_plain..].iter().all(|s| !s.recommended),
            "recommended offer after a plain one under {key}"
        );
    }
}

#[test]
fn recommended_offer_leads_even_when_it_loses_on_the_key() {
    let mut offers = abc();
    // Cheapest and fastest by far, but the lowest rating in the set.
    offers.push(make_offer("D", VehicleType::Bike, 30.0, 2, 3.0));
    let ranking = rank_offers(&offers, &ScoreWeights::default()).unwrap();
    assert!(ranking.scored[3].recommended);

    let shown = arrange(&ranking, &query(VehicleFilter::All, &[SortKey::Rating]));
    assert_eq!(ids(&shown), vec!["D", "B", "A", "C"]);
}

#[test]
fn filter_keeps_only_matching_vehicle_type() {
    let mut offers = abcd();
    offers.push(make_offer("E", VehicleType::Sedan, 150.0, 12, 4.2));
    let ranking = rank_offers(&offers, &ScoreWeights::default()).unwrap();
    let shown = arrange(
        &ranking,
        &query(VehicleFilter::Only(VehicleType::Sedan), &[]),
    );
    assert_eq!(ids(&shown), vec!["B", "E"]);
    assert!(shown.iter().all(|s| s.offer.vehicle_type == VehicleType::Sedan));
}

#[test]
fn filter_with_no_matches_is_empty() {
    let offers = abc();
    let ranking = rank_offers(&offers, &ScoreWeights::default()).unwrap();
    let shown = arrange(&ranking, &query(VehicleFilter::Only(VehicleType::Bike), &[]));
    assert!(shown.is_empty());
}

#[test]
fn filter_does_not_change_recommendation_flags() {
    let offers = abcd();
    let ranking = rank_offers(&offers, &ScoreWeights::default()).unwrap();

    let all = arrange(&ranking, &ViewQuery::default());
    let bikes = arrange(&ranking, &query(VehicleFilter::Only(VehicleType::Bike), &[]));
    let sedans = arrange(&ranking, &query(VehicleFilter::Only(VehicleType::Sedan), &[]));

    assert_eq!(ids(&bikes), vec!["D"]);
    assert!(bikes[0].recommended);
    // B is not recommended against the full set, and staying alone in the
    // filtered view does not promote it.
    assert_eq!(ids(&sedans), vec!["B"]);
    assert!(!sedans[0].recommended);
    assert_eq!(all.iter().filter(|s| s.recommended).count(), 1);
}

#[test]
fn later_keys_break_ties_of_earlier_keys() {
    let offers = vec![
        make_offer("cheap-low", VehicleType::Auto, 60.0, 6, 3.9),
        make_offer("pricey", VehicleType::Auto, 80.0, 6, 4.9),
        make_offer("cheap-high", VehicleType::Auto, 60.0, 6, 4.7),
    ];
    let ranking = rank_offers(&offers, &ScoreWeights {
        recommend_threshold: 10.0,
        ..ScoreWeights::default()
    })
    .unwrap();
    let shown = arrange(
        &ranking,
        &query(VehicleFilter::All, &[SortKey::Price, SortKey::Rating]),
    );
    assert_eq!(ids(&shown), vec!["cheap-high", "cheap-low", "pricey"]);
}

#[test]
fn tied_keys_fall_back_to_price() {
    // Every offer has the same distance, so the distance key never decides.
    let offers = abc();
    let ranking = rank_offers(&offers, &ScoreWeights::default()).unwrap();
    let shown = arrange(&ranking, &query(VehicleFilter::All, &[SortKey::Distance]));
    assert_eq!(ids(&shown), vec!["C", "A", "B"]);
}

#[test]
fn price_sort_is_idempotent() {
    let offers = abcd();
    let ranking = rank_offers(&offers, &ScoreWeights::default()).unwrap();
    let q = query(VehicleFilter::All, &[SortKey::Price]);
    let once = arrange(&ranking, &q);

    let resorted = Ranking {
        scored: once.clone(),
        average_value: ranking.average_value,
    };
    let twice = arrange(&resorted, &q);
    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn full_ties_keep_input_order() {
    let offers = vec![
        make_offer("first", VehicleType::Auto, 60.0, 6, 4.0),
        make_offer("second", VehicleType::Auto, 60.0, 6, 4.0),
        make_offer("third", VehicleType::Auto, 60.0, 6, 4.0),
    ];
    let ranking = rank_offers(&offers, &ScoreWeights::default()).unwrap();
    let shown = arrange(&ranking, &query(VehicleFilter::All, &[SortKey::Rating]));
    assert_eq!(ids(&shown), vec!["first", "second", "third"]);
}

#[test]
fn arrange_leaves_ranking_untouched() {
    let offers = abc();
    let ranking = rank_offers(&offers, &ScoreWeights::default()).unwrap();
    let before = ids(&ranking.scored);
    let _ = arrange(&ranking, &query(VehicleFilter::All, &[SortKey::Rating]));
    assert_eq!(ids(&ranking.scored), before);
    assert_eq!(offers, abc());
}

#[test]
fn build_display_drops_degenerate_offers() {
    let mut offers = abc();
    offers.push(make_offer("free", VehicleType::Auto, 0.0, 5, 4.0));
    offers.push(make_offer("instant", VehicleType::Auto, 70.0, 0, 4.0));
    let shown = build_display(&offers, &ScoreWeights::default(), &ViewQuery::default());
    assert_eq!(ids(&shown), vec!["C", "A", "B"]);
}

#[test]
fn build_display_empty_input_is_empty_state() {
    let shown = build_display(&[], &ScoreWeights::default(), &ViewQuery::default());
    assert!(shown.is_empty());
}

#[test]
fn build_display_matches_rank_then_arrange() {
    let offers = abcd();
    let q = query(VehicleFilter::All, &[SortKey::Eta, SortKey::Rating]);
    let ranking = rank_offers(&offers, &ScoreWeights::default()).unwrap();
    assert_eq!(
        ids(&build_display(&offers, &ScoreWeights::default(), &q)),
        ids(&arrange(&ranking, &q))
    );
}
