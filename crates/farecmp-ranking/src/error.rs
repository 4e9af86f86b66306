use farecmp_core::{CoreError, SessionKey};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankingError {
    #[error("invalid offer at index {index}: {field} {reason}")]
    Validation {
        index: usize,
        field: &'static str,
        reason: String,
    },

    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    #[error("unknown offer: {0}")]
    UnknownOffer(String),

    #[error("session value for {key} is not valid JSON: {source}")]
    SessionJson {
        key: SessionKey,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Store(#[from] CoreError),
}
