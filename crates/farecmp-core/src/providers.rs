use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// The ride-hailing apps farecmp compares. Order matters: normalization
/// assigns providers round-robin in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    Uber,
    Ola,
    Rapido,
    BluSmart,
    #[serde(rename = "Namma Yatri")]
    NammaYatri,
}

impl Provider {
    pub const ALL: [Provider; 5] = [
        Provider::Uber,
        Provider::Ola,
        Provider::Rapido,
        Provider::BluSmart,
        Provider::NammaYatri,
    ];

    /// Provider for the record at `position` in an upstream result list.
    #[must_use]
    pub fn for_position(position: usize) -> Provider {
        Self::ALL[position % Self::ALL.len()]
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Provider::Uber => "Uber",
            Provider::Ola => "Ola",
            Provider::Rapido => "Rapido",
            Provider::BluSmart => "BluSmart",
            Provider::NammaYatri => "Namma Yatri",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Provider::Uber => "uber",
            Provider::Ola => "ola",
            Provider::Rapido => "rapido",
            Provider::BluSmart => "blusmart",
            Provider::NammaYatri => "namma-yatri",
        }
    }

    fn index(self) -> usize {
        match self {
            Provider::Uber => 0,
            Provider::Ola => 1,
            Provider::Rapido => 2,
            Provider::BluSmart => 3,
            Provider::NammaYatri => 4,
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Static hand-off targets for one provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub name: Provider,
    /// App URI opened on hand-off, e.g. `"uber://?action=setPickup"`.
    pub deep_link: String,
    /// Website used when the app is not installed.
    pub booking_link: String,
}

#[derive(Debug, Deserialize)]
pub struct ProvidersFile {
    pub providers: Vec<ProviderConfig>,
}

/// Validated provider hand-off links, one entry per [`Provider`].
#[derive(Debug, Clone)]
pub struct ProviderCatalog {
    entries: Vec<ProviderConfig>,
}

impl ProviderCatalog {
    /// The catalog shipped with the binary.
    #[must_use]
    pub fn built_in() -> Self {
        let link = |name, deep_link: &str, booking_link: &str| ProviderConfig {
            name,
            deep_link: deep_link.to_string(),
            booking_link: booking_link.to_string(),
        };
        Self {
            entries: vec![
                link(
                    Provider::Uber,
                    "uber://?action=setPickup&pickup=my_location",
                    "https://m.uber.com/ul/",
                ),
                link(Provider::Ola, "olacabs://app/launch", "https://book.olacabs.com/"),
                link(Provider::Rapido, "rapido://", "https://www.rapido.bike/"),
                link(Provider::BluSmart, "blusmart://", "https://www.blu-smart.com/"),
                link(Provider::NammaYatri, "nammayatri://", "https://nammayatri.in/"),
            ],
        }
    }

    /// Build a catalog from a parsed providers file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the file fails validation.
    pub fn from_file(file: ProvidersFile) -> Result<Self, ConfigError> {
        validate_providers(&file)?;
        let mut entries = file.providers;
        entries.sort_by_key(|p| p.name.index());
        Ok(Self { entries })
    }

    #[must_use]
    pub fn get(&self, provider: Provider) -> &ProviderConfig {
        &self.entries[provider.index()]
    }
}

impl Default for ProviderCatalog {
    fn default() -> Self {
        Self::built_in()
    }
}

/// Load and validate a provider catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_providers(path: &Path) -> Result<ProviderCatalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ProvidersFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: ProvidersFile = serde_yaml::from_str(&content)?;
    let catalog = ProviderCatalog::from_file(file)?;

    tracing::debug!(path = %path.display(), "loaded provider catalog");
    Ok(catalog)
}

fn validate_providers(file: &ProvidersFile) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for provider in &file.providers {
        if !seen.insert(provider.name) {
            return Err(ConfigError::Validation(format!(
                "duplicate provider: '{}'",
                provider.name
            )));
        }

        if !provider.deep_link.contains("://") {
            return Err(ConfigError::Validation(format!(
                "provider '{}' has invalid deep link '{}'",
                provider.name, provider.deep_link
            )));
        }

        if !provider.booking_link.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "provider '{}' booking link must be https, got '{}'",
                provider.name, provider.booking_link
            )));
        }
    }

    if let Some(missing) = Provider::ALL.iter().find(|p| !seen.contains(*p)) {
        return Err(ConfigError::Validation(format!(
            "provider '{missing}' is missing from the catalog"
        )));
    }

    Ok(())
}
