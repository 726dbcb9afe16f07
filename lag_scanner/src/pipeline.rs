//! End-to-end run: filter, scan, validate, report.

use std::io::Write;

use tracing::{info, warn};

use crate::{
    config::ScanConfig,
    errors::{Error, Result},
    models::{
        candidate::{CorrelationCandidate, SignAgreementResult},
        panel::{RawPanel, TimeSeriesPanel},
    },
    scan::{
        filter::filter_complete,
        scanner::{PairwiseLagScanner, ScanOutcome},
        validator::SignAgreementValidator,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport {
    /// Tickers left after dropping every ticker with a gap.
    pub retained_tickers: usize,
    pub outcome: ScanOutcome,
    /// One result per candidate whose validation window was usable.
    pub results: Vec<SignAgreementResult>,
    /// Candidates skipped for a degenerate validation window.
    pub skipped_candidates: usize,
}

/// Run the whole scan over `raw`, writing the human-readable report to `out`.
///
/// The configuration is checked against the panel before any work starts.
/// Per-pair and per-candidate problems are logged and skipped.
pub fn run<W: Write>(raw: &RawPanel, config: &ScanConfig, out: &mut W) -> Result<ScanReport> {
    config.validate(raw.len())?;

    let panel = filter_complete(raw);
    writeln!(out, "{} stocks", panel.ticker_count())?;

    let outcome = PairwiseLagScanner::new(&panel, config)?.run()?;

    let validator = SignAgreementValidator::new(config.change_window);
    let mut results = Vec::with_capacity(outcome.candidates.len());
    let mut skipped_candidates = 0;
    for candidate in &outcome.candidates {
        match validate_candidate(&validator, &panel, candidate) {
            Ok(result) => {
                writeln!(out, "{result}")?;
                results.push(result);
            }
            Err(e @ Error::DegenerateWindow { .. }) => {
                warn!(error = %e, "skipping candidate");
                skipped_candidates += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        validated = results.len(),
        skipped_candidates,
        window = %validator.window(),
        "sign agreement complete"
    );

    Ok(ScanReport {
        retained_tickers: panel.ticker_count(),
        outcome,
        results,
        skipped_candidates,
    })
}

fn validate_candidate(
    validator: &SignAgreementValidator,
    panel: &TimeSeriesPanel,
    candidate: &CorrelationCandidate,
) -> Result<SignAgreementResult> {
    let series = |ticker: &str| {
        panel
            .series(ticker)
            .ok_or_else(|| Error::Panel(format!("ticker {ticker} is not in the filtered panel")))
    };
    validator.validate(candidate, series(&candidate.base)?, series(&candidate.lagged)?)
}
