//! Session-scoped key-value storage for search state.
//!
//! Values are opaque JSON strings; callers own (de)serialization.

use std::collections::HashMap;

use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    SearchResults,
    SearchData,
    SelectedOffer,
}

impl SessionKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SessionKey::SearchResults => "searchResults",
            SessionKey::SearchData => "searchData",
            SessionKey::SelectedOffer => "selectedOffer",
        }
    }
}

impl std::fmt::Display for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage backing a results session. Implementations decide where the
/// values live; the ranking code only reads at start-up and writes on selection.
pub trait SessionStore {
    /// # Errors
    ///
    /// Returns `CoreError::SessionIo` if the backing storage cannot be read.
    fn get(&self, key: SessionKey) -> Result<Option<String>, CoreError>;

    /// # Errors
    ///
    /// Returns `CoreError::SessionIo` if the backing storage cannot be written.
    fn set(&mut self, key: SessionKey, value: String) -> Result<(), CoreError>;

    /// # Errors
    ///
    /// Returns `CoreError::SessionIo` if the backing storage cannot be written.
    fn remove(&mut self, key: SessionKey) -> Result<(), CoreError>;
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: HashMap<SessionKey, String>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: SessionKey) -> Result<Option<String>, CoreError> {
        Ok(self.values.get(&key).cloned())
    }

    fn set(&mut self, key: SessionKey, value: String) -> Result<(), CoreError> {
        self.values.insert(key, value);
        Ok(())
    }

    fn remove(&mut self, key: SessionKey) -> Result<(), CoreError> {
        self.values.remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_match_storage_layout() {
        assert_eq!(SessionKey::SearchResults.as_str(), "searchResults");
        assert_eq!(SessionKey::SearchData.as_str(), "searchData");
        assert_eq!(SessionKey::SelectedOffer.to_string(), "selectedOffer");
    }

    #[test]
    fn memory_store_set_get_remove() {
        let mut store = MemorySessionStore::new();
        assert!(store.get(SessionKey::SearchData).unwrap().is_none());

        store
            .set(SessionKey::SearchData, "{\"a\":1}".to_string())
            .unwrap();
        assert_eq!(
            store.get(SessionKey::SearchData).unwrap().as_deref(),
            Some("{\"a\":1}")
        );
        assert!(store.get(SessionKey::SearchResults).unwrap().is_none());

        store.remove(SessionKey::SearchData).unwrap();
        assert!(store.get(SessionKey::SearchData).unwrap().is_none());
    }

    #[test]
    fn memory_store_overwrites() {
        let mut store = MemorySessionStore::new();
        store.set(SessionKey::SelectedOffer, "1".to_string()).unwrap();
        store.set(SessionKey::SelectedOffer, "2".to_string()).unwrap();
        assert_eq!(
            store.get(SessionKey::SelectedOffer).unwrap().as_deref(),
            Some("2")
        );
    }
}
