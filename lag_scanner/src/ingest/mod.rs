//! Building raw panels from per-day grouped aggregates.
//!
//! Network retrieval lives outside this crate; anything that can hand over a
//! day's worth of [`DailyAggregate`](crate::models::aggregate::DailyAggregate)s
//! can feed a [`builder::PanelBuilder`].

pub mod builder;
pub mod calendar;
