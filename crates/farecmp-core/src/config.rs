use crate::app_config::{AppConfig, Environment, ScoreWeights};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_f64 = |var: &str, default: f64| -> Result<f64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.trim().parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    };

    let env = parse_environment(&or_default("FARECMP_ENV", "development"))?;
    let log_level = or_default("FARECMP_LOG_LEVEL", "info");
    let providers_path = lookup("FARECMP_PROVIDERS_PATH")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from);
    let session_dir = PathBuf::from(or_default("FARECMP_SESSION_DIR", "./.farecmp-session"));

    let rng_seed = match lookup("FARECMP_RNG_SEED") {
        Ok(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
            ConfigError::InvalidEnvVar {
                var: "FARECMP_RNG_SEED".to_string(),
                reason: e.to_string(),
            }
        })?),
        Err(_) => None,
    };

    let weights = ScoreWeights {
        price: parse_f64("FARECMP_WEIGHT_PRICE", ScoreWeights::DEFAULT_PRICE)?,
        rating: parse_f64("FARECMP_WEIGHT_RATING", ScoreWeights::DEFAULT_RATING)?,
        eta: parse_f64("FARECMP_WEIGHT_ETA", ScoreWeights::DEFAULT_ETA)?,
        recommend_threshold: parse_f64(
            "FARECMP_RECOMMEND_THRESHOLD",
            ScoreWeights::DEFAULT_RECOMMEND_THRESHOLD,
        )?,
    };
    weights
        .validate()
        .map_err(|reason| ConfigError::InvalidEnvVar {
            var: "FARECMP_WEIGHT_*".to_string(),
            reason,
        })?;

    Ok(AppConfig {
        env,
        log_level,
        providers_path,
        session_dir,
        rng_seed,
        weights,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for values other than
/// `development`, `test` or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "FARECMP_ENV".to_string(),
            reason: format!("expected development, test or production, got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
