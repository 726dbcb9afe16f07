//! Vendor-agnostic grouped daily bar, the unit the ingestion builder consumes.

use serde::{Deserialize, Serialize};

use crate::models::price_field::PriceField;

/// One instrument's aggregate for a single trading day.
///
/// Every field is optional because grouped-daily feeds routinely omit values
/// (and occasionally the ticker itself).
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct DailyAggregate {
    pub ticker: Option<String>,
    pub open: Option<f64>,
    pub close: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    /// Trade count for the day.
    pub transactions: Option<u64>,
    pub volume: Option<f64>,
}

impl DailyAggregate {
    /// The ticker as a panel column name: trimmed and uppercased.
    ///
    /// Returns `None` for a missing or empty ticker, or one containing `.`
    /// (share classes and warrants such as `BRK.A`).
    pub fn normalized_ticker(&self) -> Option<String> {
        let ticker = self.ticker.as_deref()?.trim();
        if ticker.is_empty() || ticker.contains('.') {
            return None;
        }
        Some(ticker.to_uppercase())
    }

    pub fn value(&self, field: PriceField) -> Option<f64> {
        match field {
            PriceField::Open => self.open,
            PriceField::Close => self.close,
            PriceField::High => self.high,
            PriceField::Low => self.low,
            PriceField::Transactions => self.transactions.map(|t| t as f64),
            PriceField::Volume => self.volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_tickers() {
        let agg = |t: Option<&str>| DailyAggregate {
            ticker: t.map(str::to_string),
            ..Default::default()
        };
        assert_eq!(agg(Some(" aapl ")).normalized_ticker().as_deref(), Some("AAPL"));
        assert_eq!(agg(Some("BRK.A")).normalized_ticker(), None);
        assert_eq!(agg(Some("  ")).normalized_ticker(), None);
        assert_eq!(agg(None).normalized_ticker(), None);
    }

    #[test]
    fn transactions_read_as_float() {
        let agg = DailyAggregate {
            transactions: Some(42),
            ..Default::default()
        };
        assert_eq!(agg.value(PriceField::Transactions), Some(42.0));
        assert_eq!(agg.value(PriceField::Close), None);
    }
}
