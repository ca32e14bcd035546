//! The Schedule Engine: computes an amortization/depreciation schedule
//! from a validated [`ScheduleInput`].
//!
//! # Method semantics
//!
//! The depreciable base is `principal - salvage_value` for straight-line
//! and sum-of-years-digits; double-declining-balance depreciates from full
//! book value and is floored at the salvage value.
//!
//! | Method | Charge for period i |
//! |--------|---------------------|
//! | Straight-line | `(principal - salvage) / periods`, constant |
//! | Double-declining-balance | `rate × beginning balance`, rate = `2 / periods` unless given explicitly |
//! | Sum-of-years-digits | `(periods - i + 1) / (periods (periods + 1) / 2) × (principal - salvage)` |
//!
//! Every charge is quantized to two decimal places with half-even rounding
//! as the row is produced. No charge may push the ending balance below the
//! salvage value; once that clamp triggers, all later charges are zero. The
//! final period's charge is always the remaining balance above salvage, so
//! residual rounding drift is absorbed there and the schedule terminates
//! exactly at the salvage value.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use amort_core::{DepreciationMethod, PeriodUnit, ScheduleInput, compute};
//!
//! let input = ScheduleInput {
//!     principal: dec!(12000.00),
//!     salvage_value: dec!(0.00),
//!     periods: 12,
//!     start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
//!     period_unit: PeriodUnit::Monthly,
//!     method: DepreciationMethod::StraightLine,
//!     rate: None,
//! };
//!
//! let schedule = compute(&input).unwrap();
//!
//! assert_eq!(schedule.len(), 12);
//! assert_eq!(schedule.rows()[0].periodic_charge, dec!(1000.00));
//! assert_eq!(schedule.rows()[11].ending_balance, dec!(0.00));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::round_half_even;
use crate::calculations::dates::step_date;
use crate::models::{DepreciationMethod, Schedule, ScheduleInput, ScheduleRow};

/// The one failure class the engine recognizes: a precondition on the
/// input was violated. Detected eagerly, before any row is produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInputError {
    /// The principal must be strictly positive.
    #[error("principal must be positive, got {0}")]
    NonPositivePrincipal(Decimal),

    /// The salvage value may not be negative.
    #[error("salvage value must be non-negative, got {0}")]
    NegativeSalvage(Decimal),

    /// The salvage value may not exceed the principal.
    #[error("salvage value {salvage} exceeds principal {principal}")]
    SalvageExceedsPrincipal {
        salvage: Decimal,
        principal: Decimal,
    },

    /// At least one period is required.
    #[error("period count must be at least 1")]
    ZeroPeriods,

    /// An explicit declining-balance rate must lie in (0, 1].
    #[error("declining-balance rate must be between 0 and 1, got {0}")]
    InvalidRate(Decimal),

    /// Stepping the start date by the requested periods left chrono's
    /// supported calendar range.
    #[error("schedule dates exceed the supported calendar range")]
    DateOutOfRange,
}

/// Computes the full schedule for `input`.
///
/// Pure and deterministic: the same input always produces the same
/// schedule, and nothing outside the returned value is touched. Runs in a
/// single pass of length `periods`.
///
/// # Errors
///
/// Returns [`InvalidInputError`] if an input precondition is violated.
/// There is no partial-failure mode: either the complete schedule is
/// returned or no rows are produced at all.
pub fn compute(input: &ScheduleInput) -> Result<Schedule, InvalidInputError> {
    validate(input)?;

    let depreciable_base = input.principal - input.salvage_value;

    // Fixed for the whole run; only declining-balance recomputes per row.
    let straight_line_charge =
        round_half_even(depreciable_base / Decimal::from(input.periods));
    let ddb_rate = declining_balance_rate(input);
    let soyd = soyd_denominator(input.periods);

    let mut rows = Vec::with_capacity(input.periods as usize);
    let mut accumulated = Decimal::ZERO;
    let mut balance = input.principal;

    for index in 1..=input.periods {
        let date = step_date(input.start_date, input.period_unit, index)
            .ok_or(InvalidInputError::DateOutOfRange)?;

        let beginning = balance;
        let headroom = beginning - input.salvage_value;

        let charge = if index == input.periods {
            // The final period absorbs accumulated rounding drift and
            // lands the schedule exactly on the salvage value.
            headroom
        } else {
            let raw = match input.method {
                DepreciationMethod::StraightLine => straight_line_charge,
                DepreciationMethod::DoubleDecliningBalance => {
                    round_half_even(ddb_rate * beginning)
                }
                DepreciationMethod::SumOfYearsDigits => {
                    let remaining_life = Decimal::from(input.periods - index + 1);
                    round_half_even(depreciable_base * remaining_life / soyd)
                }
            };
            // Never depreciate below salvage.
            raw.min(headroom)
        };

        accumulated += charge;
        balance -= charge;

        rows.push(ScheduleRow {
            index,
            date,
            beginning_balance: beginning,
            periodic_charge: charge,
            accumulated_charge: accumulated,
            ending_balance: balance,
        });
    }

    debug!(
        method = input.method.as_str(),
        periods = input.periods,
        total_charge = %accumulated,
        "schedule computed"
    );

    Ok(Schedule::new(rows))
}

fn validate(input: &ScheduleInput) -> Result<(), InvalidInputError> {
    if input.principal <= Decimal::ZERO {
        return Err(InvalidInputError::NonPositivePrincipal(input.principal));
    }
    if input.salvage_value < Decimal::ZERO {
        return Err(InvalidInputError::NegativeSalvage(input.salvage_value));
    }
    if input.salvage_value > input.principal {
        return Err(InvalidInputError::SalvageExceedsPrincipal {
            salvage: input.salvage_value,
            principal: input.principal,
        });
    }
    if input.periods == 0 {
        return Err(InvalidInputError::ZeroPeriods);
    }
    if input.method == DepreciationMethod::DoubleDecliningBalance {
        if let Some(rate) = input.rate {
            if rate <= Decimal::ZERO || rate > Decimal::ONE {
                return Err(InvalidInputError::InvalidRate(rate));
            }
        }
    }
    Ok(())
}

/// The per-period declining-balance rate: the caller's explicit rate if
/// given, otherwise the double-declining `2 / periods`.
fn declining_balance_rate(input: &ScheduleInput) -> Decimal {
    input
        .rate
        .unwrap_or_else(|| Decimal::TWO / Decimal::from(input.periods))
}

/// The sum-of-years-digits denominator `periods (periods + 1) / 2`.
fn soyd_denominator(periods: u32) -> Decimal {
    let p = u64::from(periods);
    Decimal::from(p * (p + 1) / 2)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::PeriodUnit;

    fn date(
        y: i32,
        m: u32,
        d: u32,
    ) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn straight_line_input() -> ScheduleInput {
        ScheduleInput {
            principal: dec!(12000.00),
            salvage_value: dec!(0.00),
            periods: 12,
            start_date: date(2025, 1, 1),
            period_unit: PeriodUnit::Monthly,
            method: DepreciationMethod::StraightLine,
            rate: None,
        }
    }

    // =========================================================================
    // validation tests
    // =========================================================================

    #[test]
    fn rejects_zero_principal() {
        let mut input = straight_line_input();
        input.principal = dec!(0.00);

        let result = compute(&input);

        assert_eq!(
            result,
            Err(InvalidInputError::NonPositivePrincipal(dec!(0.00)))
        );
    }

    #[test]
    fn rejects_negative_principal() {
        let mut input = straight_line_input();
        input.principal = dec!(-100.00);

        let result = compute(&input);

        assert_eq!(
            result,
            Err(InvalidInputError::NonPositivePrincipal(dec!(-100.00)))
        );
    }

    #[test]
    fn rejects_negative_salvage() {
        let mut input = straight_line_input();
        input.salvage_value = dec!(-1.00);

        let result = compute(&input);

        assert_eq!(result, Err(InvalidInputError::NegativeSalvage(dec!(-1.00))));
    }

    #[test]
    fn rejects_salvage_above_principal() {
        let mut input = straight_line_input();
        input.salvage_value = dec!(13000.00);

        let result = compute(&input);

        assert_eq!(
            result,
            Err(InvalidInputError::SalvageExceedsPrincipal {
                salvage: dec!(13000.00),
                principal: dec!(12000.00),
            })
        );
    }

    #[test]
    fn rejects_zero_periods() {
        let mut input = straight_line_input();
        input.periods = 0;

        let result = compute(&input);

        assert_eq!(result, Err(InvalidInputError::ZeroPeriods));
    }

    #[test]
    fn rejects_out_of_range_declining_balance_rate() {
        let mut input = straight_line_input();
        input.method = DepreciationMethod::DoubleDecliningBalance;
        input.rate = Some(dec!(1.5));

        let result = compute(&input);

        assert_eq!(result, Err(InvalidInputError::InvalidRate(dec!(1.5))));
    }

    #[test]
    fn rate_is_ignored_for_straight_line() {
        let mut input = straight_line_input();
        input.rate = Some(dec!(99));

        let schedule = compute(&input).unwrap();

        assert_eq!(schedule.rows()[0].periodic_charge, dec!(1000.00));
    }

    // =========================================================================
    // straight-line tests
    // =========================================================================

    #[test]
    fn straight_line_constant_charge() {
        let schedule = compute(&straight_line_input()).unwrap();

        assert_eq!(schedule.len(), 12);
        for row in schedule.rows() {
            assert_eq!(row.periodic_charge, dec!(1000.00));
        }
        assert_eq!(schedule.rows()[11].ending_balance, dec!(0.00));
        assert_eq!(schedule.total_charge(), dec!(12000.00));
    }

    #[test]
    fn straight_line_rounding_remainder_lands_in_final_period() {
        let mut input = straight_line_input();
        input.principal = dec!(1000.00);
        input.periods = 3;

        let schedule = compute(&input).unwrap();

        assert_eq!(schedule.rows()[0].periodic_charge, dec!(333.33));
        assert_eq!(schedule.rows()[1].periodic_charge, dec!(333.33));
        assert_eq!(schedule.rows()[2].periodic_charge, dec!(333.34));
        assert_eq!(schedule.rows()[2].ending_balance, dec!(0.00));
    }

    #[test]
    fn straight_line_respects_salvage() {
        let mut input = straight_line_input();
        input.salvage_value = dec!(2400.00);

        let schedule = compute(&input).unwrap();

        // Depreciable base 9600 over 12 months.
        for row in schedule.rows() {
            assert_eq!(row.periodic_charge, dec!(800.00));
        }
        assert_eq!(schedule.rows()[11].ending_balance, dec!(2400.00));
    }

    #[test]
    fn salvage_equal_to_principal_yields_zero_charges() {
        let mut input = straight_line_input();
        input.salvage_value = dec!(12000.00);

        let schedule = compute(&input).unwrap();

        assert_eq!(schedule.len(), 12);
        for row in schedule.rows() {
            assert_eq!(row.periodic_charge, dec!(0.00));
            assert_eq!(row.ending_balance, dec!(12000.00));
        }
    }

    #[test]
    fn single_period_charges_whole_base() {
        let mut input = straight_line_input();
        input.periods = 1;
        input.salvage_value = dec!(2000.00);

        let schedule = compute(&input).unwrap();

        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.rows()[0].periodic_charge, dec!(10000.00));
        assert_eq!(schedule.rows()[0].ending_balance, dec!(2000.00));
    }

    // =========================================================================
    // double-declining-balance tests
    // =========================================================================

    fn ddb_input() -> ScheduleInput {
        ScheduleInput {
            principal: dec!(10000.00),
            salvage_value: dec!(1000.00),
            periods: 5,
            start_date: date(2025, 1, 1),
            period_unit: PeriodUnit::Yearly,
            method: DepreciationMethod::DoubleDecliningBalance,
            rate: None,
        }
    }

    #[test]
    fn ddb_charges_declining_book_value() {
        let schedule = compute(&ddb_input()).unwrap();
        let rows = schedule.rows();

        // rate = 2/5 = 0.4
        assert_eq!(rows[0].periodic_charge, dec!(4000.00));
        assert_eq!(rows[0].ending_balance, dec!(6000.00));
        assert_eq!(rows[1].periodic_charge, dec!(2400.00));
        assert_eq!(rows[1].ending_balance, dec!(3600.00));
        assert_eq!(rows[2].periodic_charge, dec!(1440.00));
        assert_eq!(rows[2].ending_balance, dec!(2160.00));
        assert_eq!(rows[3].periodic_charge, dec!(864.00));
        assert_eq!(rows[3].ending_balance, dec!(1296.00));
        // Formula charge would be 518.40, overshooting salvage; the final
        // period is capped to land exactly on 1000.
        assert_eq!(rows[4].periodic_charge, dec!(296.00));
        assert_eq!(rows[4].ending_balance, dec!(1000.00));
    }

    #[test]
    fn ddb_clamp_then_zero_charges() {
        let mut input = ddb_input();
        input.salvage_value = dec!(8000.00);

        let schedule = compute(&input).unwrap();
        let rows = schedule.rows();

        // Formula charge 4000 would overshoot; clamped to 2000 in period 1.
        assert_eq!(rows[0].periodic_charge, dec!(2000.00));
        assert_eq!(rows[0].ending_balance, dec!(8000.00));
        for row in &rows[1..] {
            assert_eq!(row.periodic_charge, dec!(0.00));
            assert_eq!(row.ending_balance, dec!(8000.00));
        }
        assert_eq!(schedule.total_charge(), dec!(2000.00));
    }

    #[test]
    fn ddb_never_falls_below_salvage() {
        let schedule = compute(&ddb_input()).unwrap();

        for row in schedule.rows() {
            assert!(row.ending_balance >= dec!(1000.00));
        }
    }

    #[test]
    fn ddb_with_zero_salvage_terminates_at_zero() {
        let mut input = ddb_input();
        input.salvage_value = dec!(0.00);

        let schedule = compute(&input).unwrap();
        let rows = schedule.rows();

        // The pure formula never reaches zero; the final period absorbs
        // the remaining book value.
        assert_eq!(rows[4].periodic_charge, rows[4].beginning_balance);
        assert_eq!(rows[4].ending_balance, dec!(0.00));
        assert_eq!(schedule.total_charge(), dec!(10000.00));
    }

    #[test]
    fn ddb_honors_explicit_rate() {
        let mut input = ddb_input();
        input.rate = Some(dec!(0.5));

        let schedule = compute(&input).unwrap();
        let rows = schedule.rows();

        assert_eq!(rows[0].periodic_charge, dec!(5000.00));
        assert_eq!(rows[1].periodic_charge, dec!(2500.00));
        assert_eq!(rows[4].ending_balance, dec!(1000.00));
    }

    // =========================================================================
    // sum-of-years-digits tests
    // =========================================================================

    fn syd_input() -> ScheduleInput {
        ScheduleInput {
            principal: dec!(15000.00),
            salvage_value: dec!(0.00),
            periods: 5,
            start_date: date(2025, 1, 1),
            period_unit: PeriodUnit::Yearly,
            method: DepreciationMethod::SumOfYearsDigits,
            rate: None,
        }
    }

    #[test]
    fn syd_descending_digit_weights() {
        let schedule = compute(&syd_input()).unwrap();
        let rows = schedule.rows();

        // SOYD = 15; weights 5/15, 4/15, 3/15, 2/15, 1/15 over base 15000.
        assert_eq!(rows[0].periodic_charge, dec!(5000.00));
        assert_eq!(rows[1].periodic_charge, dec!(4000.00));
        assert_eq!(rows[2].periodic_charge, dec!(3000.00));
        assert_eq!(rows[3].periodic_charge, dec!(2000.00));
        assert_eq!(rows[4].periodic_charge, dec!(1000.00));
        assert_eq!(rows[4].ending_balance, dec!(0.00));
    }

    #[test]
    fn syd_charges_strictly_decrease() {
        let mut input = syd_input();
        input.principal = dec!(9871.23);
        input.salvage_value = dec!(500.00);
        input.periods = 7;

        let schedule = compute(&input).unwrap();
        let rows = schedule.rows();

        for pair in rows.windows(2) {
            assert!(pair[0].periodic_charge > pair[1].periodic_charge);
        }
        assert_eq!(rows[6].ending_balance, dec!(500.00));
    }

    #[test]
    fn syd_uses_depreciable_base_not_book_value() {
        let mut input = syd_input();
        input.salvage_value = dec!(3000.00);

        let schedule = compute(&input).unwrap();
        let rows = schedule.rows();

        // Base 12000, first weight 5/15.
        assert_eq!(rows[0].periodic_charge, dec!(4000.00));
        assert_eq!(rows[4].ending_balance, dec!(3000.00));
    }

    // =========================================================================
    // date tests
    // =========================================================================

    #[test]
    fn row_dates_step_monthly_with_clamp() {
        let mut input = straight_line_input();
        input.start_date = date(2025, 1, 31);
        input.periods = 3;

        let schedule = compute(&input).unwrap();
        let rows = schedule.rows();

        assert_eq!(rows[0].date, date(2025, 2, 28));
        assert_eq!(rows[1].date, date(2025, 3, 31));
        assert_eq!(rows[2].date, date(2025, 4, 30));
    }

    #[test]
    fn row_dates_step_yearly() {
        let schedule = compute(&ddb_input()).unwrap();
        let rows = schedule.rows();

        assert_eq!(rows[0].date, date(2026, 1, 1));
        assert_eq!(rows[4].date, date(2030, 1, 1));
    }

    #[test]
    fn schedule_past_calendar_range_is_rejected() {
        let mut input = straight_line_input();
        input.start_date = NaiveDate::MAX;

        let result = compute(&input);

        assert_eq!(result, Err(InvalidInputError::DateOutOfRange));
    }
}
