//! Scan parameters: defaults, TOML loading, and range checks.
//!
//! Every field is optional in the TOML file; missing fields fall back to
//! [`ScanConfig::default`]:
//!
//! ```toml
//! max_lag = 5
//! threshold = 0.9
//! cap = 50
//! batch_size = 10000
//! change_window = "fixed_anchor"   # or "sliding"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    errors::{Error, Result},
    scan::validator::ChangeWindow,
};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct ScanConfig {
    /// Largest lag (in trading days) tried for every pair.
    pub max_lag: usize,
    /// A candidate needs `|r| > threshold`.
    pub threshold: f64,
    /// Stop scanning once this many candidates are accepted.
    pub cap: usize,
    /// Pairs between throughput reports.
    pub batch_size: u64,
    /// Anchor used by the sign-agreement validator.
    pub change_window: ChangeWindow,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_lag: 5,
            threshold: 0.9,
            cap: 50,
            batch_size: 10_000,
            change_window: ChangeWindow::FixedAnchor,
        }
    }
}

impl ScanConfig {
    /// Check every parameter against a panel of `observations` trading days.
    pub fn validate(&self, observations: usize) -> Result<()> {
        if self.max_lag == 0 {
            return Err(Error::Config("max_lag must be at least 1".into()));
        }
        if self.max_lag >= observations {
            return Err(Error::Config(format!(
                "max_lag {} must be smaller than the number of observations {observations}",
                self.max_lag
            )));
        }
        if !(0.0..1.0).contains(&self.threshold) {
            return Err(Error::Config(format!(
                "threshold {} must be in [0, 1)",
                self.threshold
            )));
        }
        if self.cap == 0 {
            return Err(Error::Config("cap must be at least 1".into()));
        }
        if self.batch_size == 0 {
            return Err(Error::Config("batch_size must be at least 1".into()));
        }
        Ok(())
    }

    pub fn load_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn load_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::load_str(&text)
    }
}
