use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DepreciationMethod, PeriodUnit};

/// Validated inputs for one schedule computation.
///
/// Built once by the input layer and handed to [`compute`](crate::compute);
/// never mutated afterwards. The invariants (`principal > 0`,
/// `0 <= salvage_value <= principal`, `periods >= 1`) are checked by the
/// engine before any row is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleInput {
    /// Initial asset cost or loan amount being depreciated.
    pub principal: Decimal,

    /// Remaining book value at the end of the schedule.
    /// Charges never reduce the ending balance below this.
    pub salvage_value: Decimal,

    /// Number of rows to produce.
    pub periods: u32,

    /// Date the schedule starts from; row dates are stepped forward from it.
    pub start_date: NaiveDate,

    /// Length of one period (month or year).
    pub period_unit: PeriodUnit,

    /// Formula used to size each period's charge.
    pub method: DepreciationMethod,

    /// Explicit declining-balance rate.
    /// When absent, double-declining-balance derives `2 / periods`.
    /// Ignored by the other methods.
    pub rate: Option<Decimal>,
}
