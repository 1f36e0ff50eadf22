//! Currency rate table and USD conversion.

pub mod conversion;
pub mod display;
pub mod error;
pub mod exchange;
pub mod rates;
pub mod search;

#[cfg(test)]
mod props;

pub use conversion::{ConversionEngine, ConversionRequest, ConversionResult, Direction};
pub use display::{format_amount, format_fee, format_result};
pub use error::{ConversionError, RateTableError};
pub use exchange::{ExchangeRate, ExchangeRateTable};
pub use search::filter_labels;
