use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "FARECMP_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.providers_path.is_none());
    assert_eq!(cfg.session_dir.to_str(), Some("./.farecmp-session"));
    assert!(cfg.rng_seed.is_none());
    assert_eq!(cfg.weights, ScoreWeights::default());
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("FARECMP_ENV", "production");
    map.insert("FARECMP_LOG_LEVEL", "debug");
    map.insert("FARECMP_PROVIDERS_PATH", "./config/providers.yaml");
    map.insert("FARECMP_SESSION_DIR", "/tmp/farecmp");
    map.insert("FARECMP_RNG_SEED", "42");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(
        cfg.providers_path.as_deref().and_then(|p| p.to_str()),
        Some("./config/providers.yaml")
    );
    assert_eq!(cfg.session_dir.to_str(), Some("/tmp/farecmp"));
    assert_eq!(cfg.rng_seed, Some(42));
}

#[test]
fn build_app_config_blank_providers_path_is_none() {
    let mut map = HashMap::new();
    map.insert("FARECMP_PROVIDERS_PATH", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.providers_path.is_none());
}

#[test]
fn build_app_config_rejects_invalid_seed() {
    let mut map = HashMap::new();
    map.insert("FARECMP_RNG_SEED", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FARECMP_RNG_SEED"),
        "expected InvalidEnvVar(FARECMP_RNG_SEED), got: {result:?}"
    );
}

#[test]
fn build_app_config_accepts_custom_weights_summing_to_one() {
    let mut map = HashMap::new();
    map.insert("FARECMP_WEIGHT_PRICE", "0.5");
    map.insert("FARECMP_WEIGHT_RATING", "0.25");
    map.insert("FARECMP_WEIGHT_ETA", "0.25");
    map.insert("FARECMP_RECOMMEND_THRESHOLD", "1.2");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.weights.price, 0.5);
    assert_eq!(cfg.weights.rating, 0.25);
    assert_eq!(cfg.weights.eta, 0.25);
    assert_eq!(cfg.weights.recommend_threshold, 1.2);
}

#[test]
fn build_app_config_rejects_weights_not_summing_to_one() {
    let mut map = HashMap::new();
    map.insert("FARECMP_WEIGHT_PRICE", "0.9");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref reason, .. }) if reason.contains("sum to 1.0")),
        "expected weight-sum error, got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_unparseable_weight() {
    let mut map = HashMap::new();
    map.insert("FARECMP_WEIGHT_ETA", "fast");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FARECMP_WEIGHT_ETA"),
        "expected InvalidEnvVar(FARECMP_WEIGHT_ETA), got: {result:?}"
    );
}

#[test]
fn score_weights_reject_negative_component() {
    let weights = ScoreWeights {
        price: 1.2,
        rating: -0.2,
        eta: 0.0,
        recommend_threshold: 1.1,
    };
    let err = weights.validate().unwrap_err();
    assert!(err.contains("rating weight"), "unexpected error: {err}");
}

#[test]
fn score_weights_reject_threshold_below_one() {
    let weights = ScoreWeights {
        recommend_threshold: 0.8,
        ..ScoreWeights::default()
    };
    assert!(weights.validate().is_err());
}

#[test]
fn environment_display() {
    assert_eq!(Environment::Development.to_string(), "development");
    assert_eq!(Environment::Test.to_string(), "test");
    assert_eq!(Environment::Production.to_string(), "production");
}
