//! Currency conversion logic.
//!
//! CRITICAL: Rounding strategy for conversions:
//! - USD -> foreign is an exact multiplication, never rounded here
//! - foreign -> USD divides to 10 decimal places, rounding half away from zero
//! - Display rounding to 2 places is a separate step (see `display`)

use std::sync::Arc;

use fxdesk_shared::CurrencyCode;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::ConversionError;
use super::exchange::ExchangeRateTable;

/// Fractional digits kept when dividing by a rate.
pub const FOREIGN_TO_USD_SCALE: u32 = 10;

const ONE_HUNDRED: Decimal = dec!(100);

/// Which way a conversion runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// USD amount in, foreign amount out.
    #[default]
    UsdToForeign,
    /// Foreign amount in, USD amount out.
    ForeignToUsd,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::UsdToForeign => Self::ForeignToUsd,
            Self::ForeignToUsd => Self::UsdToForeign,
        }
    }

    /// Human-readable direction indicator.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UsdToForeign => "USD → Foreign Currency",
            Self::ForeignToUsd => "Foreign Currency → USD",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single conversion to perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Amount to convert, in the source currency of `direction`.
    pub amount: Decimal,
    /// Conversion direction.
    pub direction: Direction,
    /// Rate table label of the foreign currency.
    pub currency: String,
    /// Fee percentage, e.g. 2.5 for 2.5%.
    pub fee_percentage: Decimal,
    /// Whether the fee is deducted at all.
    pub apply_fee: bool,
}

impl ConversionRequest {
    /// Creates a request without a fee.
    #[must_use]
    pub fn new(amount: Decimal, direction: Direction, currency: impl Into<String>) -> Self {
        Self {
            amount,
            direction,
            currency: currency.into(),
            fee_percentage: Decimal::ZERO,
            apply_fee: false,
        }
    }

    /// Deducts `fee_percentage` percent from the converted amount.
    #[must_use]
    pub fn with_fee(mut self, fee_percentage: Decimal) -> Self {
        self.fee_percentage = fee_percentage;
        self.apply_fee = true;
        self
    }
}

/// Outcome of a conversion, at full precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Input amount as given.
    pub amount: Decimal,
    /// Conversion direction.
    pub direction: Direction,
    /// Code of the foreign currency.
    pub currency_code: CurrencyCode,
    /// Rate used (foreign units per USD).
    pub rate: Decimal,
    /// Converted amount after the fee.
    pub converted: Decimal,
    /// Fee deducted, zero when no fee applied.
    pub fee: Decimal,
    /// Fee percentage that produced `fee`.
    pub fee_percentage: Decimal,
}

impl ConversionResult {
    /// Returns true if a fee was deducted.
    #[must_use]
    pub fn has_fee(&self) -> bool {
        self.fee > Decimal::ZERO
    }
}

/// Converts between USD and the currencies of a rate table.
///
/// Cheap to clone; clones share the same table.
#[derive(Debug, Clone)]
pub struct ConversionEngine {
    table: Arc<ExchangeRateTable>,
}

impl ConversionEngine {
    /// Creates an engine over a rate table.
    #[must_use]
    pub fn new(table: impl Into<Arc<ExchangeRateTable>>) -> Self {
        Self {
            table: table.into(),
        }
    }

    /// Creates an engine over the built-in rate table.
    #[must_use]
    pub fn with_builtin_rates() -> Self {
        Self::new(ExchangeRateTable::builtin())
    }

    /// The rate table this engine converts with.
    #[must_use]
    pub fn table(&self) -> &ExchangeRateTable {
        &self.table
    }

    /// Converts an amount between USD and a foreign currency.
    ///
    /// The fee, when applied, is taken from the converted amount in either
    /// direction. Fee percentages over 100 are not clamped and produce a
    /// negative result.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if the amount is negative
    /// - `UnknownCurrency` if the label is not in the table
    /// - `InvalidFee` if the fee percentage is negative
    /// - `Overflow` if the arithmetic exceeds decimal range
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use fxdesk_core::{ConversionEngine, ConversionRequest, Direction};
    ///
    /// let engine = ConversionEngine::with_builtin_rates();
    /// let request = ConversionRequest::new(dec!(100), Direction::UsdToForeign, "Saudi Arabia (SAR)");
    /// let result = engine.convert(&request).unwrap();
    /// assert_eq!(result.converted, dec!(375));
    /// ```
    pub fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, ConversionError> {
        let result = self.try_convert(request);
        if let Err(err) = &result {
            warn!(currency = %request.currency, error = %err, "conversion rejected");
        }
        result
    }

    fn try_convert(&self, request: &ConversionRequest) -> Result<ConversionResult, ConversionError> {
        if request.amount.is_sign_negative() && !request.amount.is_zero() {
            return Err(ConversionError::InvalidAmount(request.amount.to_string()));
        }

        let entry = self
            .table
            .get(&request.currency)
            .ok_or_else(|| ConversionError::UnknownCurrency(request.currency.clone()))?;

        if request.fee_percentage.is_sign_negative() && !request.fee_percentage.is_zero() {
            return Err(ConversionError::InvalidFee(request.fee_percentage.to_string()));
        }

        let gross = match request.direction {
            Direction::UsdToForeign => request
                .amount
                .checked_mul(entry.rate)
                .ok_or(ConversionError::Overflow)?,
            Direction::ForeignToUsd => request
                .amount
                .checked_div(entry.rate)
                .ok_or(ConversionError::Overflow)?
                .round_dp_with_strategy(
                    FOREIGN_TO_USD_SCALE,
                    RoundingStrategy::MidpointAwayFromZero,
                ),
        };

        let (converted, fee) = if request.apply_fee && request.fee_percentage > Decimal::ZERO {
            let fee = gross
                .checked_mul(request.fee_percentage / ONE_HUNDRED)
                .ok_or(ConversionError::Overflow)?;
            let net = gross.checked_sub(fee).ok_or(ConversionError::Overflow)?;
            (net, fee)
        } else {
            (gross, Decimal::ZERO)
        };

        debug!(
            currency = %entry.label,
            direction = ?request.direction,
            amount = %request.amount,
            rate = %entry.rate,
            converted = %converted,
            fee = %fee,
            "converted amount"
        );

        Ok(ConversionResult {
            amount: request.amount,
            direction: request.direction,
            currency_code: entry.code.clone(),
            rate: entry.rate,
            converted,
            fee,
            fee_percentage: request.fee_percentage,
        })
    }
}

impl Default for ConversionEngine {
    fn default() -> Self {
        Self::with_builtin_rates()
    }
}
