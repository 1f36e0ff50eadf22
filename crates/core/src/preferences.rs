//! Last-used inputs remembered across sessions.
//!
//! Three string values are kept: the selected currency label, the raw
//! amount text and the raw fee text. Storage is behind `PreferenceStore`;
//! this module never touches a file itself.

use crate::currency::ExchangeRateTable;
use crate::input::ConversionForm;

/// Key of the last selected currency label.
pub const PREF_LAST_CURRENCY: &str = "lastCurrency";
/// Key of the last amount text.
pub const PREF_LAST_AMOUNT: &str = "lastAmount";
/// Key of the last fee percentage text.
pub const PREF_FEE_PERCENTAGE: &str = "feePercentage";

/// Amount shown before anything was remembered.
pub const DEFAULT_AMOUNT: &str = "1.00";
/// Fee percentage shown before anything was remembered.
pub const DEFAULT_FEE_PERCENTAGE: &str = "2.5";

/// String key-value store for preferences.
pub trait PreferenceStore {
    /// Store failure type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Reads a value.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Writes a value.
    fn put(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// Remembered form inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    /// Last selected currency label, if any.
    pub last_currency: Option<String>,
    /// Last amount text.
    pub last_amount: String,
    /// Last fee percentage text.
    pub fee_percentage: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self::with_defaults(DEFAULT_AMOUNT, DEFAULT_FEE_PERCENTAGE)
    }
}

impl Preferences {
    /// Preferences with no currency and the given default texts.
    #[must_use]
    pub fn with_defaults(amount: impl Into<String>, fee_percentage: impl Into<String>) -> Self {
        Self {
            last_currency: None,
            last_amount: amount.into(),
            fee_percentage: fee_percentage.into(),
        }
    }

    /// Reads preferences, falling back to `defaults` for missing keys.
    pub fn load<S: PreferenceStore>(store: &S, defaults: Self) -> Result<Self, S::Error> {
        Ok(Self {
            last_currency: store.get(PREF_LAST_CURRENCY)?.or(defaults.last_currency),
            last_amount: store
                .get(PREF_LAST_AMOUNT)?
                .unwrap_or(defaults.last_amount),
            fee_percentage: store
                .get(PREF_FEE_PERCENTAGE)?
                .unwrap_or(defaults.fee_percentage),
        })
    }

    /// Writes all three values. A missing currency is left untouched.
    pub fn save<S: PreferenceStore>(&self, store: &mut S) -> Result<(), S::Error> {
        if let Some(currency) = &self.last_currency {
            store.put(PREF_LAST_CURRENCY, currency)?;
        }
        store.put(PREF_LAST_AMOUNT, &self.last_amount)?;
        store.put(PREF_FEE_PERCENTAGE, &self.fee_percentage)
    }

    /// The remembered currency, only if the table still has it.
    #[must_use]
    pub fn restored_currency(&self, table: &ExchangeRateTable) -> Option<&str> {
        self.last_currency
            .as_deref()
            .filter(|label| table.contains(label))
    }

    /// Records the inputs of a successful conversion.
    pub fn remember(&mut self, form: &ConversionForm) {
        self.last_currency = Some(form.currency.clone());
        self.last_amount = form.amount.trim().to_string();
        self.fee_percentage = form.fee.trim().to_string();
    }
}
