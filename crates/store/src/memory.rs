//! In-memory preference store.

use std::collections::HashMap;
use std::convert::Infallible;

use fxdesk_core::preferences::PreferenceStore;

/// Preference store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl InMemoryPreferenceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Infallible> {
        Ok(self.values.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), Infallible> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
