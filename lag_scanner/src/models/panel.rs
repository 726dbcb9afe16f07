//! Date-indexed price panels.
//!
//! A panel is one price field (e.g. close) for many tickers over the same run of
//! trading days. [`RawPanel`] is what loaders and the ingestion builder produce and
//! may contain gaps; [`TimeSeriesPanel`] is the complete-data matrix the scanner
//! works on, obtained through [`filter_complete`](crate::scan::filter::filter_complete).

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::errors::{Error, Result};

/// Name of the administrative date column in persisted panels.
pub const DAY_COLUMN: &str = "day";

/// Format of the persisted date column (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A panel whose observations may be missing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawPanel {
    dates: Vec<NaiveDate>,
    series: IndexMap<String, Vec<Option<f64>>>,
}

impl RawPanel {
    /// Build a panel, checking that dates strictly increase, every series has one
    /// entry per date, and every ticker is a valid symbol.
    pub fn new(dates: Vec<NaiveDate>, series: IndexMap<String, Vec<Option<f64>>>) -> Result<Self> {
        validate_dates(&dates)?;
        for (ticker, values) in &series {
            validate_ticker(ticker)?;
            validate_len(ticker, values.len(), dates.len())?;
        }
        Ok(Self { dates, series })
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Number of observed trading days (N).
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn ticker_count(&self) -> usize {
        self.series.len()
    }

    pub fn tickers(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn series(&self, ticker: &str) -> Option<&[Option<f64>]> {
        self.series.get(ticker).map(Vec::as_slice)
    }

    /// Iterate `(ticker, observations)` in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Option<f64>])> {
        self.series.iter().map(|(t, v)| (t.as_str(), v.as_slice()))
    }

    /// Count of missing observations for `ticker`, if it exists.
    pub fn missing_count(&self, ticker: &str) -> Option<usize> {
        self.series(ticker)
            .map(|values| values.iter().filter(|v| v.is_none()).count())
    }
}

/// A complete-data panel: every ticker has exactly one value per date.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeSeriesPanel {
    dates: Vec<NaiveDate>,
    series: IndexMap<String, Vec<f64>>,
}

impl TimeSeriesPanel {
    pub fn new(dates: Vec<NaiveDate>, series: IndexMap<String, Vec<f64>>) -> Result<Self> {
        validate_dates(&dates)?;
        for (ticker, values) in &series {
            validate_ticker(ticker)?;
            validate_len(ticker, values.len(), dates.len())?;
        }
        Ok(Self { dates, series })
    }

    pub(crate) fn from_validated(dates: Vec<NaiveDate>, series: IndexMap<String, Vec<f64>>) -> Self {
        Self { dates, series }
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Number of observed trading days (N).
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn ticker_count(&self) -> usize {
        self.series.len()
    }

    pub fn tickers(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn series(&self, ticker: &str) -> Option<&[f64]> {
        self.series.get(ticker).map(Vec::as_slice)
    }

    /// Iterate `(ticker, observations)` in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.series.iter().map(|(t, v)| (t.as_str(), v.as_slice()))
    }

    /// Lift back into a [`RawPanel`] with every observation present.
    pub fn to_raw(&self) -> RawPanel {
        RawPanel {
            dates: self.dates.clone(),
            series: self
                .series
                .iter()
                .map(|(t, v)| (t.clone(), v.iter().copied().map(Some).collect()))
                .collect(),
        }
    }
}

fn validate_dates(dates: &[NaiveDate]) -> Result<()> {
    if let Some(w) = dates.windows(2).find(|w| w[0] >= w[1]) {
        return Err(Error::Panel(format!(
            "dates must be strictly increasing: {} is followed by {}",
            w[0], w[1]
        )));
    }
    Ok(())
}

fn validate_len(ticker: &str, got: usize, want: usize) -> Result<()> {
    if got != want {
        return Err(Error::Panel(format!(
            "series {ticker} has {got} observations, expected {want}"
        )));
    }
    Ok(())
}

/// Tickers are non-empty, uppercase, contain no `.`, and are never the date column.
pub fn validate_ticker(ticker: &str) -> Result<()> {
    if ticker.is_empty() {
        return Err(Error::Panel("ticker cannot be empty".into()));
    }
    if ticker == DAY_COLUMN {
        return Err(Error::Panel(format!("`{DAY_COLUMN}` is not a ticker")));
    }
    if ticker.contains('.') {
        return Err(Error::Panel(format!("ticker {ticker} contains '.'")));
    }
    if ticker != ticker.to_uppercase() {
        return Err(Error::Panel(format!("ticker {ticker} is not uppercase")));
    }
    Ok(())
}
