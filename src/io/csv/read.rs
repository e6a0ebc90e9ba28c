//! CSV reading operations.

use std::{fs::File, path::Path};

use anyhow::{anyhow, Context, Result};
use polars::{frame::DataFrame, io::SerReader, prelude::CsvReadOptions};

/// Column names of the results table.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ResultColumns<'a> {
    pub delegation_id: &'a str,
    pub delegation_name: &'a str,
    pub district_id: &'a str,
    pub votes: [&'a str; 2],
}

/// One row of the results table, with every cell kept as text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ResultRecord {
    /// 1-based data row number, for error messages.
    pub row: usize,
    pub delegation_id: String,
    pub delegation_name: String,
    pub district_id: String,
    pub votes: [String; 2],
}

/// Reads a CSV file from `path` into a DataFrame, every column typed as a string.
pub(crate) fn read_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(file)
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))
}

/// Reads CSV text into a DataFrame, every column typed as a string.
#[cfg(test)]
pub(crate) fn read_csv_string(csv: &str) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(std::io::Cursor::new(csv.as_bytes()))
        .finish()
        .context("[io::csv::read] Failed to read CSV from string")
}

/// Extract result records from a string-typed results table, in row order.
pub(crate) fn read_result_records(df: &DataFrame, columns: ResultColumns) -> Result<Vec<ResultRecord>> {
    let names = [
        columns.delegation_id,
        columns.delegation_name,
        columns.district_id,
        columns.votes[0],
        columns.votes[1],
    ];

    let cells = names.iter()
        .map(|name| {
            let column = df.column(name)
                .map_err(|_| anyhow!("[io::csv::read] results are missing column '{name}'"))?;
            let values = column.str()
                .with_context(|| format!("[io::csv::read] column '{name}' is not text"))?;
            Ok(values.into_iter().collect::<Vec<Option<&str>>>())
        })
        .collect::<Result<Vec<_>>>()?;

    (0..df.height())
        .map(|i| {
            let cell = |c: usize| {
                cells[c][i]
                    .map(str::to_string)
                    .ok_or_else(|| anyhow!("[io::csv::read] row {} has no value in column '{}'", i + 1, names[c]))
            };
            Ok(ResultRecord {
                row: i + 1,
                delegation_id: cell(0)?,
                delegation_name: cell(1)?,
                district_id: cell(2)?,
                votes: [cell(3)?, cell(4)?],
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: ResultColumns<'static> = ResultColumns {
        delegation_id: "state",
        delegation_name: "state_name",
        district_id: "district",
        votes: ["dem", "rep"],
    };

    #[test]
    fn records_keep_leading_zeros_and_order() {
        let df = read_csv_string("state,state_name,district,dem,rep,notes\n06,California,01,100,200,x\n06,California,02,0,150,\n").unwrap();
        let records = read_result_records(&df, COLUMNS).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].delegation_id, "06");
        assert_eq!(records[0].district_id, "01");
        assert_eq!(records[0].votes, ["100".to_string(), "200".to_string()]);
        assert_eq!(records[1].row, 2);
        assert_eq!(records[1].votes[0], "0");
    }

    #[test]
    fn missing_column_is_named() {
        let df = read_csv_string("state,state_name,district,dem\n06,California,01,100\n").unwrap();
        let err = read_result_records(&df, COLUMNS).unwrap_err();
        assert!(err.to_string().contains("'rep'"));
    }

    #[test]
    fn empty_cell_reports_row_and_column() {
        let df = read_csv_string("state,state_name,district,dem,rep\n06,California,01,100,200\n06,California,02,,150\n").unwrap();
        let err = read_result_records(&df, COLUMNS).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("row 2"), "{msg}");
        assert!(msg.contains("'dem'"), "{msg}");
    }
}
