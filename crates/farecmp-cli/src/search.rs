//! Handlers that start, generate and discard searches.

use std::path::Path;

use anyhow::Context;
use farecmp_core::{Environment, SearchData, SearchResults, SessionKey, SessionStore};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::mock;
use crate::session_store::FileSessionStore;

pub(crate) fn entropy_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Generated offers are a local fixture; production searches must bring
/// their own results file.
fn mock_results(env: &Environment, seed: Option<u64>) -> anyhow::Result<SearchResults> {
    if *env == Environment::Production {
        anyhow::bail!("mock offers are disabled in {env}; pass --results <file>");
    }
    Ok(mock::generate(&mut entropy_rng(seed)))
}

fn read_results_file(path: &Path) -> anyhow::Result<SearchResults> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read search results from {}", path.display()))?;
    let mut results: SearchResults = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse search results in {}", path.display()))?;
    if results.search_id.is_none() {
        results.search_id = Some(uuid::Uuid::new_v4().to_string());
    }
    Ok(results)
}

/// Store a new search and its offers, replacing whatever the session held.
///
/// # Errors
///
/// Returns an error if the results file cannot be read, if mock offers are
/// needed in production, or if the session cannot be written.
pub(crate) fn run_search(
    store: &mut FileSessionStore,
    env: &Environment,
    data: &SearchData,
    results_path: Option<&Path>,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let results = match results_path {
        Some(path) => read_results_file(path)?,
        None => mock_results(env, seed)?,
    };

    store.set(SessionKey::SearchResults, serde_json::to_string(&results)?)?;
    store.set(SessionKey::SearchData, serde_json::to_string(data)?)?;
    store.remove(SessionKey::SelectedOffer)?;

    tracing::info!(
        offers = results.offers.len(),
        route = %data.route_label(),
        session = %store.dir().display(),
        "search stored"
    );
    println!(
        "{} offers found for {}; run `farecmp rank` to compare",
        results.offers.len(),
        data.route_label()
    );
    Ok(())
}

/// Print one mock search response.
///
/// # Errors
///
/// Returns an error in production or if the response cannot be serialized.
pub(crate) fn run_mock(env: &Environment, seed: Option<u64>) -> anyhow::Result<()> {
    let results = mock_results(env, seed)?;
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

/// Drop every value of the current session.
///
/// # Errors
///
/// Returns an error if a session file cannot be removed.
pub(crate) fn run_clear(store: &mut FileSessionStore) -> anyhow::Result<()> {
    for key in [
        SessionKey::SearchResults,
        SessionKey::SearchData,
        SessionKey::SelectedOffer,
    ] {
        store.remove(key)?;
    }
    println!("session cleared");
    Ok(())
}
