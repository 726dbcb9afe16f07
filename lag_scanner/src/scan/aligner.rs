//! Lag alignment and the Pearson coefficient over aligned slices.
//!
//! For a maximum lag `m` over `N` observations every lag shares one window length,
//! `N - m`:
//!
//! ```text
//! x = base[0 .. N - m]
//! y = lagged[d .. N - m + d]      for d in 1..=m
//! ```
//!
//! The trailing `m` base observations are discarded uniformly for all lags so
//! coefficients at different lags are computed over equally sized samples.

use crate::errors::{Error, Result};

/// Builds equal-length sample windows for one panel length and maximum lag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LagAligner {
    len: usize,
    max_lag: usize,
}

impl LagAligner {
    /// `len` is the panel length N; requires `1 <= max_lag < len`.
    pub fn new(len: usize, max_lag: usize) -> Result<Self> {
        if max_lag == 0 {
            return Err(Error::Config("max_lag must be at least 1".into()));
        }
        if max_lag >= len {
            return Err(Error::Config(format!(
                "max_lag {max_lag} must be smaller than the panel length {len}"
            )));
        }
        Ok(Self { len, max_lag })
    }

    pub fn max_lag(&self) -> usize {
        self.max_lag
    }

    /// Length of every aligned sample, `N - max_lag`.
    pub fn window(&self) -> usize {
        self.len - self.max_lag
    }

    /// The `(x, y)` sample pair for `lag_days`, borrowed straight from the series.
    pub fn align<'a>(
        &self,
        base: &'a [f64],
        lagged: &'a [f64],
        lag_days: usize,
    ) -> Result<(&'a [f64], &'a [f64])> {
        if base.len() != self.len || lagged.len() != self.len {
            return Err(Error::Panel(format!(
                "aligned series must have {} observations, got {} and {}",
                self.len,
                base.len(),
                lagged.len()
            )));
        }
        if !(1..=self.max_lag).contains(&lag_days) {
            return Err(Error::Config(format!(
                "lag {lag_days} outside 1..={}",
                self.max_lag
            )));
        }
        let window = self.window();
        Ok((&base[..window], &lagged[lag_days..lag_days + window]))
    }

    /// Pearson coefficient between `base` and `lagged` shifted by `lag_days`.
    pub fn correlation(&self, base: &[f64], lagged: &[f64], lag_days: usize) -> Result<f64> {
        let (x, y) = self.align(base, lagged, lag_days)?;
        pearson(x, y)
    }
}

/// Pearson product-moment coefficient of two equal-length samples.
///
/// Fails with [`Error::DataQuality`] when either sample is constant or the
/// result is not finite, rather than returning NaN. The coefficient is clamped
/// to `[-1, 1]` to absorb rounding.
pub fn pearson(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(Error::DataQuality(format!(
            "sample lengths differ: {} vs {}",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(Error::DataQuality(format!(
            "need at least 2 observations, got {}",
            x.len()
        )));
    }
    if is_constant(x) || is_constant(y) {
        return Err(Error::DataQuality("zero variance sample".into()));
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x <= 0.0 || var_y <= 0.0 {
        return Err(Error::DataQuality("zero variance sample".into()));
    }
    let r = cov / (var_x * var_y).sqrt();
    if !r.is_finite() {
        return Err(Error::DataQuality(format!("non-finite coefficient {r}")));
    }
    Ok(r.clamp(-1.0, 1.0))
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}
