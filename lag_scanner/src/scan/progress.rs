//! Throughput accounting for long scans. Purely advisory.

use std::{
    fmt,
    time::{Duration, Instant},
};

/// One throughput sample, emitted at the end of each batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throughput {
    /// Pairs examined since the scan started.
    pub pairs: u64,
    /// Pairs in the batch this sample covers.
    pub batch_pairs: u64,
    /// Wall time the batch took.
    pub elapsed: Duration,
}

impl Throughput {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn pairs_per_minute(&self) -> f64 {
        let secs = self.elapsed_secs();
        if secs > 0.0 {
            self.batch_pairs as f64 / (secs / 60.0)
        } else {
            f64::INFINITY
        }
    }
}

impl fmt::Display for Throughput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in {:.3}s; {:.0} per minute",
            self.pairs,
            self.elapsed_secs(),
            self.pairs_per_minute()
        )
    }
}

/// Counts pairs and yields a [`Throughput`] every `batch_size` pairs.
///
/// The batch clock restarts after each sample, so rates describe the latest
/// batch rather than the whole scan.
#[derive(Debug)]
pub struct ProgressReporter {
    batch_size: u64,
    pairs: u64,
    batch_started: Instant,
}

impl ProgressReporter {
    pub fn new(batch_size: u64) -> Self {
        Self::starting_at(batch_size, Instant::now())
    }

    pub fn starting_at(batch_size: u64, now: Instant) -> Self {
        Self {
            batch_size: batch_size.max(1),
            pairs: 0,
            batch_started: now,
        }
    }

    pub fn pairs(&self) -> u64 {
        self.pairs
    }

    pub fn record_pair(&mut self) -> Option<Throughput> {
        self.record_pair_at(Instant::now())
    }

    pub fn record_pair_at(&mut self, now: Instant) -> Option<Throughput> {
        self.pairs += 1;
        if self.pairs % self.batch_size != 0 {
            return None;
        }
        let sample = Throughput {
            pairs: self.pairs,
            batch_pairs: self.batch_size,
            elapsed: now.saturating_duration_since(self.batch_started),
        };
        self.batch_started = now;
        Some(sample)
    }
}
