//! Parquet persistence for price panels.
//!
//! One file per [`PriceField`], one row per trading day. The `day` column holds
//! `YYYY-MM-DD` strings; every other column is a ticker with nulls for missing
//! observations.

use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use indexmap::IndexMap;
use polars::prelude::*;
use tracing::info;

use crate::{
    errors::{Error, Result},
    models::{
        panel::{DATE_FORMAT, DAY_COLUMN, RawPanel},
        price_field::PriceField,
    },
};

/// Read one panel from a Parquet file.
pub fn read_panel(path: impl AsRef<Path>) -> Result<RawPanel> {
    let file = File::open(path.as_ref())?;
    let df = ParquetReader::new(file).finish()?;
    panel_from_frame(&df)
}

/// Write one panel to a Parquet file (snappy-compressed).
pub fn write_panel(path: impl AsRef<Path>, panel: &RawPanel) -> Result<()> {
    let mut df = frame_from_panel(panel)?;
    let mut file = File::create(path.as_ref())?;
    ParquetWriter::new(&mut file)
        .with_compression(ParquetCompression::Snappy)
        .finish(&mut df)?;
    Ok(())
}

/// Write every panel as `<dir>/<field>.parquet`, creating `dir` if needed.
pub fn write_panels(
    dir: impl AsRef<Path>,
    panels: &IndexMap<PriceField, RawPanel>,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(panels.len());
    for (field, panel) in panels {
        let path = dir.join(format!("{}.parquet", field.stem()));
        write_panel(&path, panel)?;
        info!(path = %path.display(), tickers = panel.ticker_count(), "wrote {field} panel");
        written.push(path);
    }
    Ok(written)
}

/// Convert a frame with a `day` column and numeric ticker columns into a panel.
pub fn panel_from_frame(df: &DataFrame) -> Result<RawPanel> {
    let day = df
        .column(DAY_COLUMN)
        .map_err(|_| Error::Panel(format!("missing `{DAY_COLUMN}` column")))?;
    let dates = day
        .as_materialized_series()
        .str()
        .map_err(|_| Error::Panel(format!("`{DAY_COLUMN}` column must hold strings")))?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            let value = value.ok_or_else(|| Error::Panel(format!("row {row} has no date")))?;
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .map_err(|e| Error::Panel(format!("row {row}: invalid date {value:?}: {e}")))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut series = IndexMap::with_capacity(df.width().saturating_sub(1));
    for column in df.get_columns() {
        let name = column.name().as_str();
        if name == DAY_COLUMN {
            continue;
        }
        match column.dtype() {
            DataType::Float64
            | DataType::Float32
            | DataType::Int64
            | DataType::Int32
            | DataType::UInt64
            | DataType::UInt32
            | DataType::Null => {}
            other => {
                return Err(Error::Panel(format!(
                    "column {name} has non-numeric type {other}"
                )));
            }
        }
        let values: Vec<Option<f64>> = column
            .cast(&DataType::Float64)?
            .as_materialized_series()
            .f64()?
            .into_iter()
            .collect();
        series.insert(name.to_string(), values);
    }

    RawPanel::new(dates, series)
}

/// Convert a panel into a frame with the `day` column first.
pub fn frame_from_panel(panel: &RawPanel) -> Result<DataFrame> {
    let days: Vec<String> = panel
        .dates()
        .iter()
        .map(|d| d.format(DATE_FORMAT).to_string())
        .collect();

    let mut columns = Vec::with_capacity(panel.ticker_count() + 1);
    columns.push(Column::new(DAY_COLUMN.into(), days));
    for (ticker, values) in panel.iter() {
        columns.push(Column::new(ticker.into(), values));
    }
    Ok(DataFrame::new(columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_frame_with_nulls_and_integers() {
        let df = df!(
            "AAPL" => &[Some(1.5), None, Some(2.5)],
            "day" => &["2023-01-03", "2023-01-04", "2023-01-05"],
            "IBM" => &[10i64, 11, 12],
        )
        .unwrap();

        let panel = panel_from_frame(&df).unwrap();
        assert_eq!(panel.len(), 3);
        assert_eq!(panel.tickers().collect::<Vec<_>>(), vec!["AAPL", "IBM"]);
        assert_eq!(panel.series("AAPL"), Some(&[Some(1.5), None, Some(2.5)][..]));
        assert_eq!(panel.series("IBM"), Some(&[Some(10.0), Some(11.0), Some(12.0)][..]));
    }

    #[test]
    fn missing_day_column_is_panel_error() {
        let df = df!("AAPL" => &[1.0, 2.0]).unwrap();
        assert!(matches!(panel_from_frame(&df), Err(Error::Panel(_))));
    }

    #[test]
    fn bad_date_is_panel_error() {
        let df = df!("day" => &["2023-01-03", "03/01/2023"], "AAPL" => &[1.0, 2.0]).unwrap();
        let err = panel_from_frame(&df).unwrap_err();
        assert!(err.to_string().contains("invalid date"));
    }

    #[test]
    fn string_ticker_column_is_rejected() {
        let df = df!("day" => &["2023-01-03"], "AAPL" => &["1.0"]).unwrap();
        assert!(matches!(panel_from_frame(&df), Err(Error::Panel(_))));
    }

    #[test]
    fn frame_puts_day_first() {
        let df = df!("AAPL" => &[Some(1.0)], "day" => &["2023-01-03"]).unwrap();
        let panel = panel_from_frame(&df).unwrap();
        let back = frame_from_panel(&panel).unwrap();
        let names: Vec<&str> = back.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["day", "AAPL"]);
    }
}
