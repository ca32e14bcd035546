//! Parsing of user-typed amounts, dates, and enum names into the engine's
//! typed inputs. This is the validation collaborator from the engine's
//! point of view: everything here is checked before a
//! [`ScheduleInput`](amort_core::ScheduleInput) is built.

use amort_core::{DepreciationMethod, PeriodUnit};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use thiserror::Error;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y%m%d"];

/// Errors surfaced for badly-formed user input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid amount '{input}': {source}")]
    InvalidAmount {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("invalid date '{0}': use YYYY-MM-DD or YYYYMMDD")]
    InvalidDate(String),

    #[error("end date {end} must be after start date {start}")]
    EndDateNotAfterStart { start: NaiveDate, end: NaiveDate },

    #[error(
        "unknown method '{0}': use straight-line (sl), double-declining-balance (ddb), or sum-of-years-digits (syd)"
    )]
    UnknownMethod(String),

    #[error("unknown period unit '{0}': use monthly or yearly")]
    UnknownUnit(String),
}

/// Parses a currency amount.
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`) and trims
/// surrounding whitespace. Empty or whitespace-only input is treated as 0.
pub fn parse_amount(s: &str) -> Result<Decimal, InputError> {
    let normalized = s.trim().replace(',', "");
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::warn!(input = %s, "invalid amount: {}", e);
        InputError::InvalidAmount {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Parses a date from one of the supported formats
/// (`YYYY-MM-DD` or `YYYYMMDD`).
pub fn parse_date(s: &str) -> Result<NaiveDate, InputError> {
    let trimmed = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| InputError::InvalidDate(s.to_string()))
}

pub fn parse_method(s: &str) -> Result<DepreciationMethod, InputError> {
    DepreciationMethod::parse(s).ok_or_else(|| InputError::UnknownMethod(s.to_string()))
}

pub fn parse_unit(s: &str) -> Result<PeriodUnit, InputError> {
    PeriodUnit::parse(s).ok_or_else(|| InputError::UnknownUnit(s.to_string()))
}

/// Derives the period count covered by an inclusive date range, counting
/// the partial period the start date falls in. The end date must be after
/// the start date.
pub fn period_count_between(
    start: NaiveDate,
    end: NaiveDate,
    unit: PeriodUnit,
) -> Result<u32, InputError> {
    if end <= start {
        return Err(InputError::EndDateNotAfterStart { start, end });
    }
    let count = match unit {
        PeriodUnit::Monthly => {
            (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32 + 1
        }
        PeriodUnit::Yearly => end.year() - start.year() + 1,
    };
    Ok(count as u32)
}
