//! All-pairs, all-lags correlation search.
//!
//! Pairs are visited in the Cartesian order of the panel's ticker list against
//! itself, `(t1, t2), (t1, t3), ..., (tk, tk-1)`, skipping a ticker paired with
//! itself. Because the scan stops at the candidate cap, this order decides which
//! candidates are found.

use tracing::{debug, info};

use crate::{
    config::ScanConfig,
    errors::{Error, Result},
    models::{candidate::CorrelationCandidate, panel::TimeSeriesPanel},
    scan::{accumulator::CandidateAccumulator, aligner::LagAligner, progress::ProgressReporter},
};

/// What a scan produced and how far it got.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome {
    /// Accepted candidates in discovery order.
    pub candidates: Vec<CorrelationCandidate>,
    /// Ordered pairs examined, including a pair interrupted by the cap.
    pub pairs_examined: u64,
    /// `(pair, lag)` combinations skipped because no coefficient was defined.
    pub skipped_lags: u64,
    /// Whether the scan stopped early because the cap was reached.
    pub capped: bool,
}

pub struct PairwiseLagScanner<'a> {
    panel: &'a TimeSeriesPanel,
    config: &'a ScanConfig,
    aligner: LagAligner,
}

impl<'a> PairwiseLagScanner<'a> {
    /// Validates `config` against the panel before any work is done.
    pub fn new(panel: &'a TimeSeriesPanel, config: &'a ScanConfig) -> Result<Self> {
        config.validate(panel.len())?;
        let aligner = LagAligner::new(panel.len(), config.max_lag)?;
        Ok(Self {
            panel,
            config,
            aligner,
        })
    }

    /// Ordered pairs of distinct tickers in enumeration order.
    pub fn pairs(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        let panel = self.panel;
        panel.tickers().enumerate().flat_map(move |(bi, base)| {
            panel
                .tickers()
                .enumerate()
                .filter(move |(li, _)| *li != bi)
                .map(move |(_, lagged)| (base, lagged))
        })
    }

    pub fn run(&self) -> Result<ScanOutcome> {
        let threshold = self.config.threshold;
        let mut accumulator = CandidateAccumulator::new(self.config.cap);
        let mut progress = ProgressReporter::new(self.config.batch_size);
        let mut skipped_lags = 0u64;
        let mut capped = false;

        info!(
            tickers = self.panel.ticker_count(),
            days = self.panel.len(),
            max_lag = self.config.max_lag,
            threshold,
            cap = self.config.cap,
            "starting lagged correlation scan"
        );

        'pairs: for (base, lagged) in self.pairs() {
            if let Some(throughput) = progress.record_pair() {
                info!(
                    pairs = throughput.pairs,
                    elapsed_secs = throughput.elapsed_secs(),
                    per_minute = throughput.pairs_per_minute(),
                    "{throughput}"
                );
            }

            let (Some(b), Some(l)) = (self.panel.series(base), self.panel.series(lagged)) else {
                continue;
            };

            for lag_days in 1..=self.aligner.max_lag() {
                let coefficient = match self.aligner.correlation(b, l, lag_days) {
                    Ok(r) => r,
                    Err(Error::DataQuality(reason)) => {
                        skipped_lags += 1;
                        debug!(base, lagged, lag_days, %reason, "skipping undefined correlation");
                        continue;
                    }
                    Err(e) => return Err(e),
                };

                if coefficient.abs() > threshold {
                    let room_left = accumulator.try_add(CorrelationCandidate {
                        base: base.to_string(),
                        lagged: lagged.to_string(),
                        lag_days,
                        coefficient,
                    });
                    if !room_left {
                        capped = true;
                        break 'pairs;
                    }
                }
            }
        }

        info!(
            pairs = progress.pairs(),
            candidates = accumulator.len(),
            skipped_lags,
            capped,
            "scan finished"
        );

        Ok(ScanOutcome {
            candidates: accumulator.into_candidates(),
            pairs_examined: progress.pairs(),
            skipped_lags,
            capped,
        })
    }
}
