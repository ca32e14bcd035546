use std::path::PathBuf;

use amort_cli::{input, logging, table};
use amort_core::{ScheduleInput, compute};
use amort_export::ScheduleExporter;
use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;

/// Compute an asset amortization/depreciation schedule.
///
/// Amounts accept comma thousands separators (e.g. 12,000.00); dates accept
/// YYYY-MM-DD or YYYYMMDD. The schedule length is either an explicit
/// --periods count or derived from an inclusive --end-date.
#[derive(Parser, Debug)]
#[command(name = "amort")]
#[command(version, about, long_about = None)]
struct Args {
    /// Asset cost or loan amount being depreciated
    #[arg(short, long)]
    principal: String,

    /// Remaining book value at the end of the schedule
    #[arg(short, long, default_value = "0")]
    salvage: String,

    /// Depreciation method: straight-line (sl), double-declining-balance
    /// (ddb), or sum-of-years-digits (syd)
    #[arg(short, long, default_value = "straight-line")]
    method: String,

    /// Schedule start date
    #[arg(long)]
    start_date: String,

    /// Number of periods to depreciate over
    #[arg(long, conflicts_with = "end_date")]
    periods: Option<u32>,

    /// Inclusive end date the period count is derived from
    #[arg(long)]
    end_date: Option<String>,

    /// Period unit: monthly or yearly
    #[arg(short, long, default_value = "monthly")]
    unit: String,

    /// Explicit declining-balance rate (defaults to 2 / periods)
    #[arg(short, long)]
    rate: Option<String>,

    /// Write the schedule to a CSV file at this path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let principal = input::parse_amount(&args.principal).context("bad --principal")?;
    let salvage_value = input::parse_amount(&args.salvage).context("bad --salvage")?;
    let method = input::parse_method(&args.method)?;
    let period_unit = input::parse_unit(&args.unit)?;
    let start_date = input::parse_date(&args.start_date).context("bad --start-date")?;

    let periods = match (args.periods, &args.end_date) {
        (Some(count), _) => count,
        (None, Some(end)) => {
            let end_date = input::parse_date(end).context("bad --end-date")?;
            input::period_count_between(start_date, end_date, period_unit)?
        }
        (None, None) => bail!("either --periods or --end-date is required"),
    };

    let rate = args
        .rate
        .as_deref()
        .map(input::parse_amount)
        .transpose()
        .context("bad --rate")?;

    let schedule_input = ScheduleInput {
        principal,
        salvage_value,
        periods,
        start_date,
        period_unit,
        method,
        rate,
    };

    let schedule = compute(&schedule_input)?;

    print!("{}", table::render(&schedule));
    info!(
        method = method.as_str(),
        periods,
        depreciable_base = %table::format_currency(principal - salvage_value),
        total_charge = %table::format_currency(schedule.total_charge()),
        "schedule computed"
    );

    if let Some(path) = &args.output {
        let written = ScheduleExporter::write_to_path(&schedule_input, &schedule, path)
            .with_context(|| format!("failed to write: {}", path.display()))?;
        println!("Wrote {} rows to {}", written, path.display());
    }

    Ok(())
}
