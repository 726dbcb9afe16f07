use thiserror::Error;

/// The unified error type for the `lag_scanner` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Scan parameters are out of range for the panel being scanned.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A (pair, lag) sample cannot produce a correlation (e.g. zero variance).
    #[error("Data quality error: {0}")]
    DataQuality(String),

    /// A candidate's sign-agreement window has no comparisons.
    #[error(
        "Degenerate validation window for {base} vs {lagged} at lag {lag_days}: {total} comparisons"
    )]
    DegenerateWindow {
        base: String,
        lagged: String,
        lag_days: usize,
        total: i64,
    },

    /// The panel violates its shape or schema (lengths, dates, tickers, columns).
    #[error("Panel error: {0}")]
    Panel(String),

    /// The scan configuration file could not be parsed.
    #[error("Config file error")]
    ConfigFile(#[from] toml::de::Error),

    /// A generic I/O error.
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// An error from the Polars library.
    #[error("Polars operation failed")]
    Polars(#[from] polars::prelude::PolarsError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
