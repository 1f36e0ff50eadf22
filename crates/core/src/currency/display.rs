//! Human-readable rendering of conversion results.
//!
//! Amounts are shown as `#,##0.00`: comma thousands separators and two
//! decimals, rounded half to even.

use fxdesk_shared::CurrencyCode;
use rust_decimal::{Decimal, RoundingStrategy};

use super::conversion::{ConversionResult, Direction};

/// Decimal places shown for every amount.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Formats an amount with thousands separators and two decimals.
///
/// ```
/// use rust_decimal_macros::dec;
/// use fxdesk_core::currency::format_amount;
///
/// assert_eq!(format_amount(dec!(1234567.891)), "1,234,567.89");
/// assert_eq!(format_amount(dec!(0.5)), "0.50");
/// ```
#[must_use]
pub fn format_amount(value: Decimal) -> String {
    let rounded =
        value.round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);
    // Like `#,##0.00`, a negative value that rounds to zero keeps its sign.
    let negative = value.is_sign_negative() && !value.is_zero();

    let fixed = format!("{:.2}", rounded.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(fixed.len() + whole.len() / 3 + 1);
    if negative {
        grouped.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push('.');
    grouped.push_str(fraction);
    grouped
}

/// Formats the fee line, e.g. `Fee (2.5%): 2.50`.
///
/// Empty when no fee was deducted. The percentage keeps the scale it was
/// entered with.
#[must_use]
pub fn format_fee(fee: Decimal, fee_percentage: Decimal) -> String {
    if fee > Decimal::ZERO {
        format!("Fee ({fee_percentage}%): {}", format_amount(fee))
    } else {
        String::new()
    }
}

/// Formats a result as `100.00 USD = 375.00 SAR`, with the fee line below
/// it when a fee was deducted.
#[must_use]
pub fn format_result(result: &ConversionResult) -> String {
    let usd = CurrencyCode::usd();
    let (from, to) = match result.direction {
        Direction::UsdToForeign => (&usd, &result.currency_code),
        Direction::ForeignToUsd => (&result.currency_code, &usd),
    };

    let mut out = format!(
        "{} {from} = {} {to}",
        format_amount(result.amount),
        format_amount(result.converted)
    );

    let fee_line = format_fee(result.fee, result.fee_percentage);
    if !fee_line.is_empty() {
        out.push('\n');
        out.push_str(&fee_line);
    }
    out
}

impl std::fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_result(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), "0.00")]
    #[case(dec!(7), "7.00")]
    #[case(dec!(999.999), "1,000.00")]
    #[case(dec!(1000), "1,000.00")]
    #[case(dec!(12345.6), "12,345.60")]
    #[case(dec!(123456), "123,456.00")]
    #[case(dec!(90798.48), "90,798.48")]
    #[case(dec!(1234567.891), "1,234,567.89")]
    #[case(dec!(-1234.5), "-1,234.50")]
    #[case(dec!(-0.001), "-0.00")]
    #[case(dec!(-0.00), "0.00")]
    fn test_format_amount(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(format_amount(value), expected);
    }

    #[rstest]
    #[case(dec!(0.125), "0.12")]
    #[case(dec!(0.135), "0.14")]
    #[case(dec!(2.005), "2.00")]
    fn test_format_amount_rounds_half_even(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(format_amount(value), expected);
    }

    #[test]
    fn test_format_fee() {
        assert_eq!(format_fee(dec!(2.5), dec!(2.5)), "Fee (2.5%): 2.50");
        assert_eq!(format_fee(dec!(1234.5), dec!(2.50)), "Fee (2.50%): 1,234.50");
        assert_eq!(format_fee(Decimal::ZERO, dec!(2.5)), "");
    }

    fn result(direction: Direction, amount: Decimal, converted: Decimal, fee: Decimal) -> ConversionResult {
        ConversionResult {
            amount,
            direction,
            currency_code: CurrencyCode::new("SAR"),
            rate: dec!(3.75),
            converted,
            fee,
            fee_percentage: if fee.is_zero() { Decimal::ZERO } else { dec!(2.5) },
        }
    }

    #[test]
    fn test_format_result_usd_to_foreign() {
        let r = result(Direction::UsdToForeign, dec!(100), dec!(375), Decimal::ZERO);
        assert_eq!(format_result(&r), "100.00 USD = 375.00 SAR");
        assert_eq!(r.to_string(), "100.00 USD = 375.00 SAR");
    }

    #[test]
    fn test_format_result_foreign_to_usd_with_fee() {
        let r = result(Direction::ForeignToUsd, dec!(375), dec!(97.5), dec!(2.5));
        assert_eq!(
            format_result(&r),
            "375.00 SAR = 97.50 USD\nFee (2.5%): 2.50"
        );
    }
}
