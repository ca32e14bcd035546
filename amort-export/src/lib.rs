//! Spreadsheet export for computed schedules.
//!
//! Serializes a [`Schedule`] into CSV rows that open directly in a
//! spreadsheet: a header, an initial row carrying the opening book value,
//! then one row per period. Numeric columns carry exactly two fractional
//! digits.

use std::io::Write;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use amort_core::calculations::common::round_half_even;
use amort_core::{Schedule, ScheduleInput};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors that can occur while exporting a schedule.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    CsvWrite(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::CsvWrite(err.to_string())
    }
}

/// A single row of the exported spreadsheet.
///
/// Amount columns are pre-formatted strings so the file always shows two
/// fractional digits, independent of the decimal scale the engine carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleCsvRecord {
    #[serde(rename = "Period")]
    pub period: u32,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Amortization Expense")]
    pub expense: String,
    #[serde(rename = "Accumulated Amortization")]
    pub accumulated: String,
    #[serde(rename = "Book Value")]
    pub book_value: String,
}

/// Writes a computed [`Schedule`] as spreadsheet-compatible CSV.
pub struct ScheduleExporter;

impl ScheduleExporter {
    /// Builds the exported rows: one "Initial Value" row for the opening
    /// book value, then an "Amortization" row per period.
    pub fn records(
        input: &ScheduleInput,
        schedule: &Schedule,
    ) -> Vec<ScheduleCsvRecord> {
        let mut records = Vec::with_capacity(schedule.len() + 1);

        records.push(ScheduleCsvRecord {
            period: 0,
            date: input.start_date.format(DATE_FORMAT).to_string(),
            description: "Initial Value".to_string(),
            expense: amount(Decimal::ZERO),
            accumulated: amount(Decimal::ZERO),
            book_value: amount(input.principal),
        });

        for row in schedule.rows() {
            records.push(ScheduleCsvRecord {
                period: row.index,
                date: row.date.format(DATE_FORMAT).to_string(),
                description: "Amortization".to_string(),
                expense: amount(row.periodic_charge),
                accumulated: amount(row.accumulated_charge),
                book_value: amount(row.ending_balance),
            });
        }

        records
    }

    /// Writes the schedule to `writer` and returns the number of records
    /// written (excluding the header).
    pub fn write<W: Write>(
        input: &ScheduleInput,
        schedule: &Schedule,
        writer: W,
    ) -> Result<usize, ExportError> {
        let records = Self::records(input, schedule);
        let mut csv_writer = csv::Writer::from_writer(writer);

        for record in &records {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;

        Ok(records.len())
    }

    /// Writes the schedule to a file at `path`, creating or truncating it.
    pub fn write_to_path(
        input: &ScheduleInput,
        schedule: &Schedule,
        path: &Path,
    ) -> Result<usize, ExportError> {
        let file = std::fs::File::create(path)?;
        Self::write(input, schedule, file)
    }
}

/// Formats an amount with exactly two fractional digits.
fn amount(value: Decimal) -> String {
    format!("{:.2}", round_half_even(value))
}
