//! Handlers for the results screen: ranking the stored search and selecting
//! an offer from it.

use chrono::{DateTime, Utc};
use farecmp_core::{
    AppConfig, ProviderCatalog, SearchResults, SessionKey, SessionStore, SortKey, VehicleFilter,
};
use farecmp_ranking::{ComparisonSummary, ResultsView, ScoredOffer};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::render;
use crate::search::entropy_rng;
use crate::session_store::FileSessionStore;

#[derive(Debug, Serialize)]
struct RankOutput<'a> {
    generated_at: DateTime<Utc>,
    route: String,
    search_id: Option<&'a str>,
    vehicle: String,
    sort_keys: Vec<SortKey>,
    summary: ComparisonSummary,
    offers: Vec<ScoredOffer<'a>>,
}

/// Seed derived from the stored search id, so `rank` and `select` see the
/// same adjusted fares for one search without a configured seed.
fn session_seed<S: SessionStore>(store: &S) -> anyhow::Result<Option<u64>> {
    let Some(raw) = store.get(SessionKey::SearchResults)? else {
        return Ok(None);
    };
    let Some(search_id) = serde_json::from_str::<SearchResults>(&raw)
        .ok()
        .and_then(|r| r.search_id)
    else {
        return Ok(None);
    };

    let digest = Sha256::digest(search_id.as_bytes());
    let bytes: [u8; 8] = digest[..8].try_into()?;
    Ok(Some(u64::from_le_bytes(bytes)))
}

fn load_view(
    store: &FileSessionStore,
    catalog: &ProviderCatalog,
    config: &AppConfig,
    seed: Option<u64>,
) -> anyhow::Result<Option<ResultsView>> {
    let seed = match seed {
        Some(seed) => Some(seed),
        None => session_seed(store)?,
    };
    let view = ResultsView::from_session(store, catalog, config.weights, &mut entropy_rng(seed))?;
    if view.is_none() {
        println!("no search in session; run `farecmp search --pickup <address>` first");
    }
    Ok(view)
}

/// Print the stored search ranked under the given filter and sort keys.
///
/// # Errors
///
/// Returns an error if the session cannot be read or holds a malformed offer.
pub(crate) fn run_rank(
    store: &FileSessionStore,
    catalog: &ProviderCatalog,
    config: &AppConfig,
    seed: Option<u64>,
    vehicle: VehicleFilter,
    sort_keys: Vec<SortKey>,
    json: bool,
) -> anyhow::Result<()> {
    let Some(mut view) = load_view(store, catalog, config, seed)? else {
        return Ok(());
    };
    view.select_vehicle(vehicle);
    view.set_sort_keys(sort_keys);

    let offers = view.display();
    let summary = view.summary();

    if json {
        let output = RankOutput {
            generated_at: Utc::now(),
            route: view.search().route_label(),
            search_id: view.search_id(),
            vehicle: vehicle.to_string(),
            sort_keys: view.query().sort_keys.clone(),
            summary,
            offers,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if view.is_empty() {
        println!("no rides found for {}", view.search().route_label());
        return Ok(());
    }

    render::print_header(view.search(), &summary, vehicle);
    render::print_offers(&offers, vehicle);
    Ok(())
}

/// Record the chosen offer and print where to continue booking.
///
/// # Errors
///
/// Returns an error if the offer id is unknown or the session cannot be
/// read or written.
pub(crate) fn run_select(
    store: &mut FileSessionStore,
    catalog: &ProviderCatalog,
    config: &AppConfig,
    seed: Option<u64>,
    offer_id: &str,
) -> anyhow::Result<()> {
    let Some(view) = load_view(store, catalog, config, seed)? else {
        return Ok(());
    };
    let offer = view.select(offer_id, store)?;

    println!(
        "{} {} · ₹{} · {} min",
        offer.provider.name(),
        offer.vehicle_name,
        offer.display_fare(),
        offer.eta_minutes
    );
    println!("open in app: {}", offer.deep_link);
    println!("or book on the web: {}", offer.booking_link);
    Ok(())
}
