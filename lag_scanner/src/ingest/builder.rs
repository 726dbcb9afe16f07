use chrono::NaiveDate;
use indexmap::IndexMap;
use tracing::debug;

use crate::{
    errors::{Error, Result},
    models::{aggregate::DailyAggregate, panel::RawPanel, price_field::PriceField},
};

type Columns = IndexMap<String, Vec<Option<f64>>>;

/// Incrementally builds one [`RawPanel`] per [`PriceField`], one day at a time.
///
/// Every column always has one entry per pushed day: a ticker first seen on a
/// later day is back-filled with missing values, and a ticker absent from a
/// day (or lacking that field) gets a missing value for it.
#[derive(Debug, Default)]
pub struct PanelBuilder {
    dates: Vec<NaiveDate>,
    columns: [Columns; PriceField::ALL.len()],
}

impl PanelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of days pushed so far.
    pub fn days(&self) -> usize {
        self.dates.len()
    }

    /// Append one trading day.
    ///
    /// Returns `Ok(false)` without recording the day when `aggregates` is empty
    /// (holidays and failed fetches look the same). Dates must strictly increase.
    pub fn push_day(&mut self, date: NaiveDate, aggregates: &[DailyAggregate]) -> Result<bool> {
        if let Some(last) = self.dates.last() {
            if date <= *last {
                return Err(Error::Panel(format!(
                    "day {date} pushed after {last}; days must strictly increase"
                )));
            }
        }
        if aggregates.is_empty() {
            debug!(%date, "no aggregates, skipping day");
            return Ok(false);
        }

        let row = self.dates.len();
        for field in PriceField::ALL {
            let columns = &mut self.columns[field.index()];
            for agg in aggregates {
                let (Some(ticker), Some(value)) = (agg.normalized_ticker(), agg.value(field)) else {
                    continue;
                };
                let column = columns.entry(ticker).or_insert_with(|| vec![None; row]);
                // First aggregate for a ticker on a given day wins.
                if column.len() == row {
                    column.push(Some(value));
                }
            }
            for column in columns.values_mut() {
                if column.len() == row {
                    column.push(None);
                }
            }
        }
        self.dates.push(date);
        Ok(true)
    }

    /// Finalize into one panel per field.
    pub fn finish(self) -> Result<IndexMap<PriceField, RawPanel>> {
        let Self { dates, columns } = self;
        PriceField::ALL
            .into_iter()
            .zip(columns)
            .map(|(field, series)| RawPanel::new(dates.clone(), series).map(|panel| (field, panel)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, d).unwrap()
    }

    fn agg(ticker: &str, close: Option<f64>) -> DailyAggregate {
        DailyAggregate {
            ticker: Some(ticker.to_string()),
            open: close,
            close,
            high: close,
            low: close,
            transactions: Some(10),
            volume: Some(1000.0),
        }
    }

    #[test]
    fn builds_aligned_columns() {
        let mut builder = PanelBuilder::new();
        assert!(builder.push_day(day(3), &[agg("aapl", Some(1.0)), agg("MSFT", Some(2.0))]).unwrap());
        assert!(builder.push_day(day(4), &[agg("AAPL", Some(1.5)), agg("TSLA", Some(9.0))]).unwrap());
        assert!(builder.push_day(day(5), &[agg("AAPL", None), agg("MSFT", Some(2.5))]).unwrap());

        let panels = builder.finish().unwrap();
        let close = &panels[&PriceField::Close];
        assert_eq!(close.dates(), &[day(3), day(4), day(5)]);
        assert_eq!(close.series("AAPL"), Some(&[Some(1.0), Some(1.5), None][..]));
        assert_eq!(close.series("MSFT"), Some(&[Some(2.0), None, Some(2.5)][..]));
        assert_eq!(close.series("TSLA"), Some(&[None, Some(9.0), None][..]));

        // AAPL still reported a trade count on the day its close was missing.
        let transactions = &panels[&PriceField::Transactions];
        assert_eq!(transactions.series("AAPL"), Some(&[Some(10.0); 3][..]));
    }

    #[test]
    fn drops_dotted_and_missing_tickers() {
        let mut builder = PanelBuilder::new();
        let unnamed = DailyAggregate {
            close: Some(3.0),
            ..Default::default()
        };
        builder
            .push_day(day(3), &[agg("BRK.A", Some(1.0)), unnamed, agg("IBM", Some(2.0))])
            .unwrap();
        let panels = builder.finish().unwrap();
        assert_eq!(panels[&PriceField::Close].tickers().collect::<Vec<_>>(), vec!["IBM"]);
    }

    #[test]
    fn empty_day_is_skipped() {
        let mut builder = PanelBuilder::new();
        assert!(!builder.push_day(day(2), &[]).unwrap());
        assert_eq!(builder.days(), 0);
    }

    #[test]
    fn rejects_out_of_order_days() {
        let mut builder = PanelBuilder::new();
        builder.push_day(day(4), &[agg("IBM", Some(1.0))]).unwrap();
        assert!(matches!(
            builder.push_day(day(4), &[agg("IBM", Some(1.0))]),
            Err(Error::Panel(_))
        ));
    }

    #[test]
    fn duplicate_ticker_keeps_first() {
        let mut builder = PanelBuilder::new();
        builder
            .push_day(day(3), &[agg("IBM", Some(1.0)), agg("ibm", Some(7.0))])
            .unwrap();
        let panels = builder.finish().unwrap();
        assert_eq!(panels[&PriceField::Close].series("IBM"), Some(&[Some(1.0)][..]));
    }
}
