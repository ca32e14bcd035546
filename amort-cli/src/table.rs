//! Plain-text rendering of a computed schedule.

use amort_core::Schedule;
use amort_core::calculations::common::round_half_even;
use rust_decimal::Decimal;

const HEADERS: [&str; 5] = ["Period", "Date", "Expense", "Accumulated", "Book Value"];

/// Formats a currency amount with two fractional digits and comma
/// thousands separators (e.g. `1234567.891` -> `"1,234,567.89"`).
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_half_even(value);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some(parts) => parts,
        None => (text.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(text.len() + int_part.len() / 3);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (position, digit) in int_part.chars().enumerate() {
        if position > 0 && (int_part.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push('.');
    grouped.push_str(frac_part);
    grouped
}

/// Renders the schedule as an aligned text table, one line per period.
pub fn render(schedule: &Schedule) -> String {
    let rows: Vec<[String; 5]> = schedule
        .rows()
        .iter()
        .map(|row| {
            [
                row.index.to_string(),
                row.date.format("%Y-%m-%d").to_string(),
                format_currency(row.periodic_charge),
                format_currency(row.accumulated_charge),
                format_currency(row.ending_balance),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut output = String::new();
    render_line(&mut output, &HEADERS.map(String::from), &widths);
    render_rule(&mut output, &widths);
    for row in &rows {
        render_line(&mut output, row, &widths);
    }
    output
}

fn render_line(
    output: &mut String,
    cells: &[String; 5],
    widths: &[usize; 5],
) {
    for (column, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if column > 0 {
            output.push_str("  ");
        }
        // Dates left-aligned, everything else right-aligned.
        if column == 1 {
            output.push_str(&format!("{cell:<width$}"));
        } else {
            output.push_str(&format!("{cell:>width$}"));
        }
    }
    while output.ends_with(' ') {
        output.pop();
    }
    output.push('\n');
}

fn render_rule(
    output: &mut String,
    widths: &[usize; 5],
) {
    let total: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    output.push_str(&"-".repeat(total));
    output.push('\n');
}
