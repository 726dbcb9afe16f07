//! Scanner output and validator output records.

use std::fmt;

use serde::Serialize;

/// A `(base, lagged, lag, coefficient)` tuple that cleared the correlation threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationCandidate {
    /// Unshifted reference series.
    pub base: String,
    /// Series shifted forward by `lag_days` relative to `base`.
    pub lagged: String,
    pub lag_days: usize,
    /// Pearson coefficient of the aligned sample pair, in `[-1, 1]`.
    pub coefficient: f64,
}

impl fmt::Display for CorrelationCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} & {}+{}: {:.3}",
            self.base, self.lagged, self.lag_days, self.coefficient
        )
    }
}

/// Directional agreement measured for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignAgreementResult {
    pub candidate: CorrelationCandidate,
    pub mismatch_count: usize,
    pub total_count: usize,
}

impl SignAgreementResult {
    /// `mismatch_count / total_count`, or `None` when there were no comparisons.
    pub fn mismatch_ratio(&self) -> Option<f64> {
        (self.total_count > 0).then(|| self.mismatch_count as f64 / self.total_count as f64)
    }
}

impl fmt::Display for SignAgreementResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Missed {} of {}", self.mismatch_count, self.total_count)?;
        if let Some(ratio) = self.mismatch_ratio() {
            write!(f, "; or wrong {ratio:.3}")?;
        }
        write!(f, " - correlation: {}", self.candidate.coefficient)
    }
}
