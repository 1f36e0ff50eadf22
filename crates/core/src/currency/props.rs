//! Property-based tests for currency conversion.
//!
//! - Unit rate: converting 1 USD yields the table rate
//! - Round trip: USD -> foreign -> USD stays within 10-decimal precision
//! - Fee monotonicity: a larger fee never yields a larger result

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::conversion::{ConversionEngine, ConversionRequest, Direction};
use super::display::format_amount;
use super::exchange::ExchangeRateTable;
use super::rates::BUILTIN_RATES;

/// Strategy to pick a label from the built-in table.
fn builtin_label() -> impl Strategy<Value = &'static str> {
    (0..BUILTIN_RATES.len()).prop_map(|i| BUILTIN_RATES[i].0)
}

/// Strategy to generate non-negative amounts (0.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate fee percentages (0.00 to 100.00).
fn fee_percentage() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|bps| Decimal::new(bps, 2))
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::UsdToForeign), Just(Direction::ForeignToUsd)]
}

#[test]
fn unit_amount_converts_to_rate_for_every_currency() {
    let engine = ConversionEngine::with_builtin_rates();
    for (label, rate) in BUILTIN_RATES {
        let request = ConversionRequest::new(Decimal::ONE, Direction::UsdToForeign, *label);
        let result = engine.convert(&request).unwrap();
        assert_eq!(result.converted, *rate, "{label}");
        assert!(result.fee.is_zero());
    }
}

#[test]
fn unit_round_trip_for_every_currency() {
    let engine = ConversionEngine::with_builtin_rates();
    let tolerance = dec!(0.0000000001);
    for label in engine.table().labels() {
        let there = engine
            .convert(&ConversionRequest::new(Decimal::ONE, Direction::UsdToForeign, label))
            .unwrap();
        let back = engine
            .convert(&ConversionRequest::new(there.converted, Direction::ForeignToUsd, label))
            .unwrap();
        assert!((back.converted - Decimal::ONE).abs() <= tolerance, "{label}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* amount and currency, converting to foreign and back SHALL
    /// land within one unit of the 10th decimal place.
    #[test]
    fn prop_round_trip_within_precision(
        amount in amount(),
        label in builtin_label(),
    ) {
        let engine = ConversionEngine::with_builtin_rates();
        let there = engine
            .convert(&ConversionRequest::new(amount, Direction::UsdToForeign, label))
            .unwrap();
        let back = engine
            .convert(&ConversionRequest::new(there.converted, Direction::ForeignToUsd, label))
            .unwrap();
        prop_assert!(
            (back.converted - amount).abs() <= dec!(0.0000000001),
            "{} -> {} -> {}", amount, there.converted, back.converted
        );
    }

    /// *For any* request, a higher fee percentage SHALL NOT increase the
    /// converted amount.
    #[test]
    fn prop_fee_is_monotonic(
        amount in amount(),
        label in builtin_label(),
        direction in direction(),
        low in fee_percentage(),
        high in fee_percentage(),
    ) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        let engine = ConversionEngine::with_builtin_rates();
        let base = ConversionRequest::new(amount, direction, label);

        let at_low = engine.convert(&base.clone().with_fee(low)).unwrap();
        let at_high = engine.convert(&base.with_fee(high)).unwrap();
        prop_assert!(at_low.converted >= at_high.converted);
    }

    /// *For any* fee up to 100%, the result SHALL stay non-negative and the
    /// fee plus the result SHALL equal the fee-free conversion.
    #[test]
    fn prop_fee_splits_gross_amount(
        amount in amount(),
        label in builtin_label(),
        direction in direction(),
        fee in fee_percentage(),
    ) {
        let engine = ConversionEngine::with_builtin_rates();
        let base = ConversionRequest::new(amount, direction, label);

        let gross = engine.convert(&base).unwrap();
        let net = engine.convert(&base.with_fee(fee)).unwrap();
        prop_assert!(net.converted >= Decimal::ZERO);
        prop_assert!(net.fee >= Decimal::ZERO);
        prop_assert_eq!(net.converted + net.fee, gross.converted);
    }

    /// *For any* non-negative value, display output SHALL carry exactly two
    /// decimals and only digits, commas and one point.
    #[test]
    fn prop_display_shape(cents in 0i64..1_000_000_000_000i64) {
        let text = format_amount(Decimal::new(cents, 2));
        let (whole, fraction) = text.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), 2);
        prop_assert!(whole.chars().all(|c| c.is_ascii_digit() || c == ','));
        prop_assert_eq!(whole.replace(',', ""), (cents / 100).to_string());
    }

    /// *For any* label not in the table, conversion SHALL fail with
    /// `UnknownCurrency`.
    #[test]
    fn prop_unknown_label_rejected(suffix in "[A-Z]{3}") {
        let table = ExchangeRateTable::builtin();
        let label = format!("Nowhere ({suffix})");
        prop_assume!(!table.contains(&label));
        let engine = ConversionEngine::new(table);
        let result = engine.convert(&ConversionRequest::new(Decimal::ONE, Direction::UsdToForeign, label));
        prop_assert!(matches!(result, Err(super::error::ConversionError::UnknownCurrency(_))));
    }
}
