use indexmap::IndexMap;
use tracing::info;

use crate::models::panel::{RawPanel, TimeSeriesPanel};

/// Keep only the tickers with no missing observation across every date.
///
/// Dates are carried over unchanged. Returning zero tickers is valid.
pub fn filter_complete(raw: &RawPanel) -> TimeSeriesPanel {
    let series: IndexMap<String, Vec<f64>> = raw
        .iter()
        .filter_map(|(ticker, values)| {
            values
                .iter()
                .copied()
                .collect::<Option<Vec<f64>>>()
                .map(|complete| (ticker.to_string(), complete))
        })
        .collect();

    info!(
        retained = series.len(),
        dropped = raw.ticker_count() - series.len(),
        days = raw.len(),
        "filtered panel to complete tickers"
    );

    // Lengths and tickers were already validated by `RawPanel`.
    TimeSeriesPanel::from_validated(raw.dates().to_vec(), series)
}
