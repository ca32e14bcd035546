//! Calendar-correct date stepping for schedule rows.

use chrono::{Months, NaiveDate};

use crate::models::PeriodUnit;

/// Returns the date of row `index`: `start` advanced by `index` periods.
///
/// Month arithmetic is calendar-correct, not fixed 30-day months. When the
/// start day does not exist in the target month the date is clamped to the
/// last valid day, and because each row steps from `start` rather than from
/// the previous row, the clamp never compounds: a schedule starting Jan 31
/// lands on Feb 28 (or 29) and then returns to Mar 31.
///
/// Returns `None` if the stepped date falls outside chrono's supported
/// calendar range.
pub fn step_date(
    start: NaiveDate,
    unit: PeriodUnit,
    index: u32,
) -> Option<NaiveDate> {
    let months = unit.months().checked_mul(index)?;
    start.checked_add_months(Months::new(months))
}
