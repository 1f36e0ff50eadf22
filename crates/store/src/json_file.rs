//! JSON file preference store.
//!
//! The file holds one flat object of string values:
//!
//! ```json
//! { "feePercentage": "2.5", "lastAmount": "100", "lastCurrency": "Saudi Arabia (SAR)" }
//! ```
//!
//! Values are cached in memory; every `put` rewrites the whole file.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fxdesk_core::preferences::PreferenceStore;
use tracing::debug;

use crate::error::StoreError;

/// Preference store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFilePreferenceStore {
    /// Opens the store at `path`. A missing file reads as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|err| StoreError::corrupt(&path, err))?,
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(StoreError::io(&path, err)),
        };
        debug!(path = %path.display(), entries = values.len(), "opened preference file");
        Ok(Self { path, values })
    }

    /// An empty store that will write to `path`, ignoring any existing file.
    #[must_use]
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            values: BTreeMap::new(),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| StoreError::io(parent, err))?;
        }
        let encoded = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, encoded).map_err(|err| StoreError::io(&self.path, err))
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    type Error = StoreError;

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
