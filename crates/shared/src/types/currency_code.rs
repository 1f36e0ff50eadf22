//! Currency code carried by rate table labels.
//!
//! Labels look like `"Saudi Arabia (SAR)"`; the code is whatever sits
//! between the first `(` and the first `)`.

use serde::{Deserialize, Serialize};

/// Short currency code shown next to amounts (e.g. "SAR", "XOF").
///
/// Not restricted to ISO 4217: a label without parentheses yields the
/// whole label as its code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a code from any string.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The US dollar, the fixed side of every conversion.
    #[must_use]
    pub fn usd() -> Self {
        Self("USD".to_string())
    }

    /// Extracts the code from a table label.
    ///
    /// Returns the text between the first `(` and the first `)`. If either
    /// is missing, or the `)` comes before the `(`, the label is returned
    /// unchanged.
    ///
    /// ```
    /// use fxdesk_shared::CurrencyCode;
    ///
    /// assert_eq!(CurrencyCode::from_label("Saudi Arabia (SAR)").as_str(), "SAR");
    /// assert_eq!(CurrencyCode::from_label("Atlantis").as_str(), "Atlantis");
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match (label.find('('), label.find(')')) {
            (Some(open), Some(close)) if close > open => Self(label[open + 1..close].to_string()),
            _ => Self(label.to_string()),
        }
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
