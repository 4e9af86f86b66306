use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Weights blended into an offer's value score, plus the multiplier over the
/// mean score an offer must beat to be recommended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub price: f64,
    pub rating: f64,
    pub eta: f64,
    pub recommend_threshold: f64,
}

impl ScoreWeights {
    pub const DEFAULT_PRICE: f64 = 0.4;
    pub const DEFAULT_RATING: f64 = 0.3;
    pub const DEFAULT_ETA: f64 = 0.3;
    pub const DEFAULT_RECOMMEND_THRESHOLD: f64 = 1.1;

    /// Checks that every weight is finite and non-negative, that the three
    /// component weights sum to 1, and that the threshold is at least 1.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when a constraint is violated.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("price", self.price),
            ("rating", self.rating),
            ("eta", self.eta),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} weight must be a non-negative number, got {value}"));
            }
        }

        let sum = self.price + self.rating + self.eta;
        if (sum - 1.0).abs() > 1e-9 {
            return Err(format!("weights must sum to 1.0, got {sum}"));
        }

        if !self.recommend_threshold.is_finite() || self.recommend_threshold < 1.0 {
            return Err(format!(
                "recommend threshold must be >= 1.0, got {}",
                self.recommend_threshold
            ));
        }

        Ok(())
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            price: Self::DEFAULT_PRICE,
            rating: Self::DEFAULT_RATING,
            eta: Self::DEFAULT_ETA,
            recommend_threshold: Self::DEFAULT_RECOMMEND_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Optional YAML provider catalog; the built-in catalog is used when unset.
    pub providers_path: Option<PathBuf>,
    /// Directory holding the file-backed session keys.
    pub session_dir: PathBuf,
    /// Seed for the fare-adjustment RNG. `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
    pub weights: ScoreWeights,
}
