use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One period of a computed schedule.
///
/// All fields are derived during computation and never independently
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// 1-based period number.
    pub index: u32,

    /// Period date, stepped from the schedule's start date.
    pub date: NaiveDate,

    /// Book value at the start of the period.
    pub beginning_balance: Decimal,

    /// Charge for this period, quantized to two decimal places.
    pub periodic_charge: Decimal,

    /// Running sum of charges through this period.
    pub accumulated_charge: Decimal,

    /// Book value at the end of the period.
    pub ending_balance: Decimal,
}

/// An ordered, read-only sequence of schedule rows.
///
/// Computed once from a [`ScheduleInput`](super::ScheduleInput) and only
/// ever replaced by recomputation on new input. The ending balance of each
/// row equals the beginning balance of the next, and the final row ends
/// exactly at the salvage value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    rows: Vec<ScheduleRow>,
}

impl Schedule {
    pub(crate) fn new(rows: Vec<ScheduleRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total charge across the whole schedule (the last accumulated value).
    pub fn total_charge(&self) -> Decimal {
        self.rows
            .last()
            .map(|row| row.accumulated_charge)
            .unwrap_or(Decimal::ZERO)
    }
}
