//! Shared rounding helpers for schedule calculations.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-even
/// (banker's) rounding.
///
/// Values exactly at the midpoint round to the nearest even cent, so the
/// rounding error across a long schedule carries no systematic bias.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use amort_core::calculations::common::round_half_even;
///
/// assert_eq!(round_half_even(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_even(dec!(123.455)), dec!(123.46)); // 5 is odd, round up
/// assert_eq!(round_half_even(dec!(123.445)), dec!(123.44)); // 4 is even, round down
/// assert_eq!(round_half_even(dec!(123.456)), dec!(123.46));
/// ```
pub fn round_half_even(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointNearestEven)
}
