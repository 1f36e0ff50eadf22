//! Currency error types.

use fxdesk_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Conversion validation failures.
///
/// All variants are recoverable: the caller reports them and asks again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Amount is negative or could not be parsed.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Currency label is not in the rate table.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Fee percentage is negative or could not be parsed.
    #[error("Invalid fee: {0}")]
    InvalidFee(String),

    /// Amount too large for decimal arithmetic.
    #[error("Amount too large to convert")]
    Overflow,
}

/// Rate table construction failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RateTableError {
    /// Label is empty or whitespace.
    #[error("Currency label cannot be blank")]
    BlankLabel,

    /// Label appears more than once.
    #[error("Duplicate currency label: {0}")]
    DuplicateLabel(String),

    /// Rate is zero or negative.
    #[error("Exchange rate for {label} must be positive, got {rate}")]
    NonPositiveRate {
        /// Offending label.
        label: String,
        /// Offending rate.
        rate: Decimal,
    },
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::UnknownCurrency(_) => Self::NotFound(err.to_string()),
            ConversionError::InvalidAmount(_)
            | ConversionError::InvalidFee(_)
            | ConversionError::Overflow => Self::Validation(err.to_string()),
        }
    }
}

impl From<RateTableError> for AppError {
    fn from(err: RateTableError) -> Self {
        Self::Configuration(err.to_string())
    }
}
