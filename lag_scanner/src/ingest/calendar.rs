use chrono::{Datelike, NaiveDate, Weekday};

/// Monday–Friday dates among the `calendar_days` days starting at `start`.
///
/// Market holidays are not known here; a feed returning no aggregates for a
/// weekday is expected and skipped by the builder.
pub fn weekdays(start: NaiveDate, calendar_days: usize) -> impl Iterator<Item = NaiveDate> {
    start
        .iter_days()
        .take(calendar_days)
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
}
