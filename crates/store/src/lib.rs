//! Preference persistence for fxdesk.
//!
//! Implements `fxdesk_core::preferences::PreferenceStore` for a JSON file
//! on disk and for plain memory.

pub mod error;
pub mod json_file;
pub mod memory;

pub use error::StoreError;
pub use json_file::JsonFilePreferenceStore;
pub use memory::InMemoryPreferenceStore;
