//! Offer normalization, value scoring and display ordering for farecmp.
//!
//! Raw search results are normalized into [`farecmp_core::RideOffer`]s, scored
//! against the full offer set, then filtered and ordered for display. Every
//! step borrows the offers and returns a fresh view; nothing is mutated in place.

pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod scorer;
pub mod summary;
pub mod view;

pub use error::RankingError;
pub use normalize::{map_vehicle_type, normalize_offers};
pub use pipeline::{arrange, build_display, compare_offers, ViewQuery};
pub use scorer::{rank_offers, OfferStats, Ranking, ScoredOffer, ValueScore};
pub use summary::{summarize, ComparisonSummary};
pub use view::ResultsView;
