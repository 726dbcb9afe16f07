//! Lagged pairwise correlation scanning over daily price panels.
//!
//! The pipeline filters a [`RawPanel`](models::panel::RawPanel) down to complete
//! tickers, searches every ordered ticker pair for strong correlation at a
//! positive lag, and re-walks each hit to measure day-over-day sign agreement.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod errors;
pub mod ingest;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod scan;

pub use errors::{Error, Result};
