//! CSV writing operations.

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerWriter, prelude::{CsvWriter, NamedFrom}, series::Series};

use crate::election::DelegationSummary;

/// Write a DataFrame to a CSV file.
pub(crate) fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[io::csv::write] Failed to create CSV file: {}", path.display()))?;
    CsvWriter::new(file)
        .finish(df)
        .with_context(|| format!("[io::csv::write] Failed to write CSV to {:?}", path))
}

/// One column per summary field, one row per delegation.
pub(crate) fn summary_frame(rows: &[DelegationSummary]) -> Result<DataFrame> {
    let text = |f: fn(&DelegationSummary) -> &str| rows.iter().map(|r| f(r).to_string()).collect::<Vec<_>>();
    let count = |f: fn(&DelegationSummary) -> usize| rows.iter().map(|r| f(r) as u32).collect::<Vec<_>>();
    let ratio = |f: fn(&DelegationSummary) -> f64| rows.iter().map(f).collect::<Vec<_>>();

    let df = DataFrame::new(vec![
        Series::new("name".into(), text(|r| &r.name)).into(),
        Series::new("abbreviation".into(), text(|r| &r.abbreviation)).into(),
        Series::new("seats".into(), count(|r| r.seats)).into(),
        Series::new("left_seats".into(), count(|r| r.seat_results[0])).into(),
        Series::new("right_seats".into(), count(|r| r.seat_results[1])).into(),
        Series::new("efficiency_gap".into(), ratio(|r| r.efficiency_gap)).into(),
        Series::new("efficiency_gap_seats".into(), count(|r| r.efficiency_gap_seats)).into(),
        Series::new("efficiency_gap_imputation".into(), ratio(|r| r.efficiency_gap_imputation)).into(),
        Series::new("efficiency_gap_seats_imputation".into(), count(|r| r.efficiency_gap_seats_imputation)).into(),
        Series::new("left_uncontested".into(), count(|r| r.uncontested_seats[0])).into(),
        Series::new("right_uncontested".into(), count(|r| r.uncontested_seats[1])).into(),
    ])?;
    Ok(df)
}

/// Write the per-delegation summary table to a CSV file.
pub fn write_summary(rows: &[DelegationSummary], path: &Path) -> Result<()> {
    let mut df = summary_frame(rows)?;
    write_csv(&mut df, path)
}
