//! Day-over-day sign agreement for accepted candidates.
//!
//! For a candidate at lag `d` over series of length `N`, each `i` in
//! `0 .. N - d - 1` compares
//!
//! ```text
//! change1 = base[i + 1] - base[i]
//! change2 = lagged[i + 1 + d] - anchor
//! ```
//!
//! where `anchor` depends on [`ChangeWindow`]. The pair agrees when both
//! changes are strictly positive or both strictly negative; anything else,
//! including a flat day, is a mismatch.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{Error, Result},
    models::candidate::{CorrelationCandidate, SignAgreementResult},
};

/// Which lagged value `change2` is measured against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeWindow {
    /// `lagged[d]` for every `i`: each change is taken from the same fixed
    /// starting value rather than the previous day.
    #[default]
    FixedAnchor,
    /// `lagged[i + d]`: a true day-over-day change in the lagged series.
    Sliding,
}

impl fmt::Display for ChangeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeWindow::FixedAnchor => f.write_str("fixed"),
            ChangeWindow::Sliding => f.write_str("sliding"),
        }
    }
}

impl FromStr for ChangeWindow {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "fixed" | "fixed_anchor" | "fixed-anchor" => Ok(ChangeWindow::FixedAnchor),
            "sliding" => Ok(ChangeWindow::Sliding),
            other => Err(Error::Config(format!(
                "unknown change window {other:?}, expected `fixed` or `sliding`"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SignAgreementValidator {
    window: ChangeWindow,
}

impl SignAgreementValidator {
    pub fn new(window: ChangeWindow) -> Self {
        Self { window }
    }

    pub fn window(&self) -> ChangeWindow {
        self.window
    }

    /// Re-walk the full, unshrunk series for `candidate`.
    ///
    /// Fails with [`Error::DegenerateWindow`] when `N - d - 1 <= 0`.
    pub fn validate(
        &self,
        candidate: &CorrelationCandidate,
        base: &[f64],
        lagged: &[f64],
    ) -> Result<SignAgreementResult> {
        if base.len() != lagged.len() {
            return Err(Error::Panel(format!(
                "{} has {} observations but {} has {}",
                candidate.base,
                base.len(),
                candidate.lagged,
                lagged.len()
            )));
        }

        let d = candidate.lag_days;
        let total = base.len() as i64 - d as i64 - 1;
        if total <= 0 {
            return Err(Error::DegenerateWindow {
                base: candidate.base.clone(),
                lagged: candidate.lagged.clone(),
                lag_days: d,
                total,
            });
        }
        let total = total as usize;

        let mismatch_count = (0..total)
            .filter(|&i| {
                let change1 = base[i + 1] - base[i];
                let anchor = match self.window {
                    ChangeWindow::FixedAnchor => lagged[d],
                    ChangeWindow::Sliding => lagged[i + d],
                };
                let change2 = lagged[i + 1 + d] - anchor;
                !same_strict_sign(change1, change2)
            })
            .count();

        Ok(SignAgreementResult {
            candidate: candidate.clone(),
            mismatch_count,
            total_count: total,
        })
    }
}

fn same_strict_sign(a: f64, b: f64) -> bool {
    (a > 0.0 && b > 0.0) || (a < 0.0 && b < 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(lag_days: usize) -> CorrelationCandidate {
        CorrelationCandidate {
            base: "A".into(),
            lagged: "B".into(),
            lag_days,
            coefficient: 1.0,
        }
    }

    #[test]
    fn shifted_copy_has_no_mismatches() {
        let base: Vec<f64> = (1..=10).map(f64::from).collect();
        let mut lagged = vec![0.0, 0.5];
        lagged.extend_from_slice(&base[..8]);

        for window in [ChangeWindow::FixedAnchor, ChangeWindow::Sliding] {
            let result = SignAgreementValidator::new(window)
                .validate(&candidate(2), &base, &lagged)
                .unwrap();
            assert_eq!(result.total_count, 7);
            assert_eq!(result.mismatch_count, 0, "{window}");
            assert_eq!(result.mismatch_ratio(), Some(0.0));
        }
    }

    #[test]
    fn fixed_anchor_compares_against_lagged_d() {
        let base = [1.0, 2.0, 1.0, 2.0, 1.0];
        // lagged[1] = 5 is the anchor at lag 1.
        let lagged = [0.0, 5.0, 6.0, 5.5, 7.0];

        // i=0: c1=+1, c2=6-5=+1   agree
        // i=1: c1=-1, c2=5.5-5=+.5 mismatch
        // i=2: c1=+1, c2=7-5=+2   agree
        let fixed = SignAgreementValidator::new(ChangeWindow::FixedAnchor)
            .validate(&candidate(1), &base, &lagged)
            .unwrap();
        assert_eq!((fixed.mismatch_count, fixed.total_count), (1, 3));

        // i=1: c2=5.5-6=-.5 agree with c1=-1
        let sliding = SignAgreementValidator::new(ChangeWindow::Sliding)
            .validate(&candidate(1), &base, &lagged)
            .unwrap();
        assert_eq!((sliding.mismatch_count, sliding.total_count), (0, 3));
    }

    #[test]
    fn flat_day_counts_as_mismatch() {
        let base = [1.0, 1.0, 2.0, 3.0];
        let lagged = [9.0, 0.0, 1.0, 2.0];
        let result = SignAgreementValidator::default()
            .validate(&candidate(1), &base, &lagged)
            .unwrap();
        // i=0: c1=0 -> mismatch; i=1: c1=+1, c2=2-0=+2 agree
        assert_eq!((result.mismatch_count, result.total_count), (1, 2));
    }

    #[test]
    fn lag_of_n_minus_one_is_degenerate() {
        let s: Vec<f64> = (1..=10).map(f64::from).collect();
        let err = SignAgreementValidator::default()
            .validate(&candidate(9), &s, &s)
            .unwrap_err();
        assert!(matches!(err, Error::DegenerateWindow { total: 0, lag_days: 9, .. }));

        let err = SignAgreementValidator::default()
            .validate(&candidate(15), &s, &s)
            .unwrap_err();
        assert!(matches!(err, Error::DegenerateWindow { total: -6, .. }));
    }

    #[test]
    fn parses_window_names() {
        assert_eq!("fixed".parse::<ChangeWindow>().unwrap(), ChangeWindow::FixedAnchor);
        assert_eq!("Sliding".parse::<ChangeWindow>().unwrap(), ChangeWindow::Sliding);
        assert!("rolling".parse::<ChangeWindow>().is_err());
    }
}
