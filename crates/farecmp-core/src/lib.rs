//! Shared domain types and configuration for farecmp.

pub mod app_config;
pub mod config;
pub mod offers;
pub mod providers;
pub mod search;
pub mod session;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, ScoreWeights};
pub use config::{load_app_config, load_app_config_from_env};
pub use offers::{RideOffer, SortKey, VehicleFilter, VehicleType};
pub use providers::{load_providers, Provider, ProviderCatalog, ProviderConfig, ProvidersFile};
pub use search::{RawOffer, SearchData, SearchResults};
pub use session::{MemorySessionStore, SessionKey, SessionStore};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read providers file {path}: {source}")]
    ProvidersFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse providers file: {0}")]
    ProvidersFileParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown vehicle type: {0}")]
    UnknownVehicleType(String),

    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("session store I/O error for {key}: {source}")]
    SessionIo {
        key: String,
        #[source]
        source: std::io::Error,
    },
}
