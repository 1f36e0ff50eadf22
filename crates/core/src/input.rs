//! Parsing raw form text into conversion requests.
//!
//! The engine only sees typed decimals; everything a user can type goes
//! through here first.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::{ConversionError, ConversionRequest, Direction, ExchangeRateTable};

/// Returns true if `text` may appear in a numeric field while typing.
///
/// Accepts the empty string and text of the form `digits[.digits]`, where
/// either side of the point may be empty. Signs, exponents and digit
/// grouping are rejected.
#[must_use]
pub fn is_valid_decimal_input(text: &str) -> bool {
    let mut seen_point = false;
    text.chars().all(|c| match c {
        '0'..='9' => true,
        '.' if !seen_point => {
            seen_point = true;
            true
        }
        _ => false,
    })
}

/// Parses amount text.
///
/// # Errors
///
/// `InvalidAmount` if the text is empty, not a plain decimal, or negative.
pub fn parse_amount(text: &str) -> Result<Decimal, ConversionError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ConversionError::InvalidAmount(
            "Please enter an amount.".to_string(),
        ));
    }

    let amount = parse_plain_decimal(text)
        .ok_or_else(|| ConversionError::InvalidAmount(format!("'{text}' is not a valid number")))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ConversionError::InvalidAmount(format!(
            "{text} is negative; please enter a positive amount"
        )));
    }
    Ok(amount)
}

/// Parses fee percentage text. Empty text means no fee.
///
/// # Errors
///
/// `InvalidFee` if the text is not a plain decimal or is negative.
pub fn parse_fee(text: &str) -> Result<Decimal, ConversionError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let fee = parse_plain_decimal(text)
        .ok_or_else(|| ConversionError::InvalidFee(format!("'{text}' is not a valid number")))?;
    if fee.is_sign_negative() && !fee.is_zero() {
        return Err(ConversionError::InvalidFee(format!(
            "{text} is negative; fee percentage cannot be negative"
        )));
    }
    Ok(fee)
}

// `digits[.digits]` with an optional leading '-'. `Decimal::from_str` alone
// also takes `_` separators and exponents.
fn parse_plain_decimal(text: &str) -> Option<Decimal> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || digits == "." || !is_valid_decimal_input(digits) {
        return None;
    }
    Decimal::from_str(text).ok()
}

/// Raw state of the conversion form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionForm {
    /// Amount text as typed.
    pub amount: String,
    /// Selected currency label.
    pub currency: String,
    /// Selected direction.
    pub direction: Direction,
    /// Fee percentage text as typed.
    pub fee: String,
    /// Whether the fee checkbox is ticked.
    pub apply_fee: bool,
}

impl ConversionForm {
    /// Flips the conversion direction.
    pub fn switch_direction(&mut self) {
        self.direction = self.direction.toggled();
    }

    /// Validates the form and builds a request.
    ///
    /// The fee text is only read when `apply_fee` is set.
    ///
    /// # Errors
    ///
    /// `InvalidAmount`, `UnknownCurrency` or `InvalidFee`, checked in that
    /// order.
    pub fn to_request(&self, table: &ExchangeRateTable) -> Result<ConversionRequest, ConversionError> {
        let amount = parse_amount(&self.amount)?;

        if !table.contains(&self.currency) {
            return Err(ConversionError::UnknownCurrency(self.currency.clone()));
        }

        let request = ConversionRequest::new(amount, self.direction, self.currency.clone());
        if self.apply_fee {
            Ok(request.with_fee(parse_fee(&self.fee)?))
        } else {
            Ok(request)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("")]
    #[case("0")]
    #[case("12")]
    #[case("12.")]
    #[case(".5")]
    #[case("1234.5678")]
    #[case(".")]
    fn test_valid_decimal_input(#[case] text: &str) {
        assert!(is_valid_decimal_input(text));
    }

    #[rstest]
    #[case("-1")]
    #[case("+1")]
    #[case("1.2.3")]
    #[case("1,000")]
    #[case("1e5")]
    #[case("abc")]
    #[case(" 1")]
    fn test_invalid_decimal_input(#[case] text: &str) {
        assert!(!is_valid_decimal_input(text));
    }

    #[rstest]
    #[case("100", dec!(100))]
    #[case("  1.00 ", dec!(1.00))]
    #[case("0", dec!(0))]
    #[case("1234.5678", dec!(1234.5678))]
    fn test_parse_amount(#[case] text: &str, #[case] expected: Decimal) {
        assert_eq!(parse_amount(text).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("abc")]
    #[case("1,000")]
    #[case("-5")]
    #[case("1_000")]
    #[case("1__0.5_")]
    #[case("1e3")]
    #[case("+1")]
    #[case(".")]
    #[case("-")]
    fn test_parse_amount_rejects(#[case] text: &str) {
        assert!(matches!(
            parse_amount(text),
            Err(ConversionError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_parse_amount_empty_message() {
        assert_eq!(
            parse_amount("").unwrap_err().to_string(),
            "Invalid amount: Please enter an amount."
        );
    }

    #[test]
    fn test_parse_fee() {
        assert_eq!(parse_fee("2.5").unwrap(), dec!(2.5));
        assert_eq!(parse_fee("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_fee("  ").unwrap(), Decimal::ZERO);
        assert!(matches!(parse_fee("x"), Err(ConversionError::InvalidFee(_))));
        assert!(matches!(parse_fee("-1"), Err(ConversionError::InvalidFee(_))));
    }

    #[rstest]
    #[case("2_5")]
    #[case("1e3")]
    #[case("2.5%")]
    #[case("2.5.0")]
    fn test_parse_fee_rejects_non_plain_decimals(#[case] text: &str) {
        assert!(matches!(parse_fee(text), Err(ConversionError::InvalidFee(_))));
    }

    #[test]
    fn test_negative_amount_reports_negative() {
        let err = parse_amount("-5").unwrap_err().to_string();
        assert!(err.contains("negative"), "{err}");
    }

    fn form(amount: &str, currency: &str, fee: &str, apply_fee: bool) -> ConversionForm {
        ConversionForm {
            amount: amount.to_string(),
            currency: currency.to_string(),
            direction: Direction::UsdToForeign,
            fee: fee.to_string(),
            apply_fee,
        }
    }

    #[test]
    fn test_form_to_request() {
        let table = ExchangeRateTable::builtin();
        let request = form("100", "Saudi Arabia (SAR)", "2.5", true)
            .to_request(&table)
            .unwrap();
        assert_eq!(request.amount, dec!(100));
        assert_eq!(request.currency, "Saudi Arabia (SAR)");
        assert_eq!(request.fee_percentage, dec!(2.5));
        assert!(request.apply_fee);
    }

    #[test]
    fn test_form_ignores_fee_text_when_unchecked() {
        let table = ExchangeRateTable::builtin();
        let request = form("100", "Saudi Arabia (SAR)", "garbage", false)
            .to_request(&table)
            .unwrap();
        assert_eq!(request.fee_percentage, Decimal::ZERO);
        assert!(!request.apply_fee);
    }

    #[test]
    fn test_form_validation_order() {
        let table = ExchangeRateTable::builtin();
        assert!(matches!(
            form("-1", "Atlantis (ATL)", "-1", true).to_request(&table),
            Err(ConversionError::InvalidAmount(_))
        ));
        assert!(matches!(
            form("1", "Atlantis (ATL)", "-1", true).to_request(&table),
            Err(ConversionError::UnknownCurrency(_))
        ));
        assert!(matches!(
            form("1", "Saudi Arabia (SAR)", "-1", true).to_request(&table),
            Err(ConversionError::InvalidFee(_))
        ));
    }

    #[test]
    fn test_switch_direction() {
        let mut form = form("1", "Saudi Arabia (SAR)", "", false);
        form.switch_direction();
        assert_eq!(form.direction, Direction::ForeignToUsd);
        form.switch_direction();
        assert_eq!(form.direction, Direction::UsdToForeign);
    }
}
