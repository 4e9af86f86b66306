//! State behind the results screen: the normalized offers for one search plus
//! the user's current sort and filter choices.

use farecmp_core::{
    ProviderCatalog, RideOffer, ScoreWeights, SearchData, SearchResults, SessionKey,
    SessionStore, SortKey, VehicleFilter,
};
use rand::Rng;
use serde::de::DeserializeOwned;

use crate::error::RankingError;
use crate::normalize::normalize_offers;
use crate::pipeline::{build_display, ViewQuery};
use crate::scorer::ScoredOffer;
use crate::summary::{summarize, ComparisonSummary};

#[derive(Debug, Clone)]
pub struct ResultsView {
    offers: Vec<RideOffer>,
    search: SearchData,
    search_id: Option<String>,
    weights: ScoreWeights,
    query: ViewQuery,
}

impl ResultsView {
    #[must_use]
    pub fn new(offers: Vec<RideOffer>, search: SearchData, weights: ScoreWeights) -> Self {
        Self {
            offers,
            search,
            search_id: None,
            weights,
            query: ViewQuery::default(),
        }
    }

    /// Build the view from the stored search, normalizing the raw offers.
    ///
    /// Returns `Ok(None)` when either the results or the search itself is
    /// missing from the store; the caller should send the user back to search.
    ///
    /// # Errors
    ///
    /// Returns [`RankingError::SessionJson`] if a stored value is not valid JSON,
    /// [`RankingError::Validation`] if a raw offer is malformed, or
    /// [`RankingError::Store`] if the store cannot be read.
    pub fn from_session<S, R>(
        store: &S,
        catalog: &ProviderCatalog,
        weights: ScoreWeights,
        rng: &mut R,
    ) -> Result<Option<Self>, RankingError>
    where
        S: SessionStore + ?Sized,
        R: Rng,
    {
        let Some(results) = read_json::<SearchResults, _>(store, SessionKey::SearchResults)? else {
            return Ok(None);
        };
        let Some(search) = read_json::<SearchData, _>(store, SessionKey::SearchData)? else {
            return Ok(None);
        };

        let offers = normalize_offers(&results.offers, catalog, rng)?;
        tracing::info!(
            offers = offers.len(),
            search_id = results.search_id.as_deref().unwrap_or("-"),
            route = %search.route_label(),
            "loaded search from session"
        );

        Ok(Some(Self {
            offers,
            search,
            search_id: results.search_id,
            weights,
            query: ViewQuery::default(),
        }))
    }

    #[must_use]
    pub fn offers(&self) -> &[RideOffer] {
        &self.offers
    }

    #[must_use]
    pub fn search(&self) -> &SearchData {
        &self.search
    }

    #[must_use]
    pub fn search_id(&self) -> Option<&str> {
        self.search_id.as_deref()
    }

    #[must_use]
    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    /// `true` when the search returned nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    /// Deselects `key` if active, otherwise appends it as the lowest-priority key.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if let Some(pos) = self.query.sort_keys.iter().position(|k| *k == key) {
            self.query.sort_keys.remove(pos);
        } else {
            self.query.sort_keys.push(key);
        }
    }

    /// Replaces the sort keys, keeping the first occurrence of any repeated key.
    pub fn set_sort_keys<I: IntoIterator<Item = SortKey>>(&mut self, keys: I) {
        self.query.sort_keys.clear();
        for key in keys {
            if !self.query.sort_keys.contains(&key) {
                self.query.sort_keys.push(key);
            }
        }
    }

    pub fn select_vehicle(&mut self, filter: VehicleFilter) {
        self.query.vehicle_filter = filter;
    }

    /// Offers to render, in display order. Recomputed from scratch on every call.
    #[must_use]
    pub fn display(&self) -> Vec<ScoredOffer<'_>> {
        build_display(&self.offers, &self.weights, &self.query)
    }

    #[must_use]
    pub fn summary(&self) -> ComparisonSummary {
        summarize(&self.offers, self.display().len())
    }

    #[must_use]
    pub fn find(&self, offer_id: &str) -> Option<&RideOffer> {
        self.offers.iter().find(|o| o.id == offer_id)
    }

    /// Records the chosen offer under `selectedOffer` and returns it; the
    /// caller opens its deep link.
    ///
    /// # Errors
    ///
    /// Returns [`RankingError::UnknownOffer`] if no offer has `offer_id`, or
    /// [`RankingError::Store`] if the store cannot be written.
    pub fn select<S>(&self, offer_id: &str, store: &mut S) -> Result<&RideOffer, RankingError>
    where
        S: SessionStore + ?Sized,
    {
        let offer = self
            .find(offer_id)
            .ok_or_else(|| RankingError::UnknownOffer(offer_id.to_string()))?;

        let json = serde_json::to_string(offer).map_err(|source| RankingError::SessionJson {
            key: SessionKey::SelectedOffer,
            source,
        })?;
        store.set(SessionKey::SelectedOffer, json)?;

        tracing::info!(offer = %offer.id, provider = %offer.provider, "offer selected");
        Ok(offer)
    }
}

fn read_json<T, S>(store: &S, key: SessionKey) -> Result<Option<T>, RankingError>
where
    T: DeserializeOwned,
    S: SessionStore + ?Sized,
{
    store
        .get(key)?
        .map(|raw| serde_json::from_str(&raw).map_err(|source| RankingError::SessionJson { key, source }))
        .transpose()
}
