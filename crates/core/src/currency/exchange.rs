//! Exchange rate types and the immutable rate table.

use std::collections::HashMap;

use fxdesk_shared::CurrencyCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::RateTableError;
use super::rates::BUILTIN_RATES;

/// Exchange rate of one foreign currency against the US dollar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Display label, e.g. "Saudi Arabia (SAR)".
    pub label: String,
    /// Code extracted from the label.
    pub code: CurrencyCode,
    /// Exchange rate (1 USD = rate foreign units).
    pub rate: Decimal,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    #[must_use]
    pub fn new(label: impl Into<String>, rate: Decimal) -> Self {
        let label = label.into();
        Self {
            code: CurrencyCode::from_label(&label),
            label,
            rate,
        }
    }
}

/// Ordered, immutable mapping from currency label to rate.
///
/// Built once and shared read-only; every rate is strictly positive and
/// every label is unique and non-blank.
#[derive(Debug, Clone)]
pub struct ExchangeRateTable {
    entries: Vec<ExchangeRate>,
    index: HashMap<String, usize>,
}

impl ExchangeRateTable {
    /// Builds a table from `(label, rate)` pairs, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns an error on a blank label, a repeated label or a rate that
    /// is not strictly positive.
    pub fn new<I, S>(entries: I) -> Result<Self, RateTableError>
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        let mut table = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };

        for (label, rate) in entries {
            let label = label.into();
            if label.trim().is_empty() {
                return Err(RateTableError::BlankLabel);
            }
            if rate <= Decimal::ZERO {
                return Err(RateTableError::NonPositiveRate { label, rate });
            }
            if table.index.contains_key(&label) {
                return Err(RateTableError::DuplicateLabel(label));
            }
            table.index.insert(label.clone(), table.entries.len());
            table.entries.push(ExchangeRate::new(label, rate));
        }

        Ok(table)
    }

    /// The built-in rate table.
    #[must_use]
    pub fn builtin() -> Self {
        let entries: Vec<ExchangeRate> = BUILTIN_RATES
            .iter()
            .map(|&(label, rate)| ExchangeRate::new(label, rate))
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.label.clone(), i))
            .collect();
        Self { entries, index }
    }

    /// Looks up the entry for a label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&ExchangeRate> {
        self.index.get(label).map(|&i| &self.entries[i])
    }

    /// Looks up the rate for a label.
    #[must_use]
    pub fn rate(&self, label: &str) -> Option<Decimal> {
        self.get(label).map(|entry| entry.rate)
    }

    /// Returns true if the label is in the table.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Labels in table order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }

    /// Labels in alphabetical order.
    #[must_use]
    pub fn sorted_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.labels().collect();
        labels.sort_unstable();
        labels
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = &ExchangeRate> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ExchangeRateTable {
    fn default() -> Self {
        Self::builtin()
    }
}
