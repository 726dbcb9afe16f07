use crate::models::candidate::CorrelationCandidate;

/// Bounded collection of accepted candidates.
///
/// The scan stops once the accumulator is full, so what it holds are the first
/// `cap` candidates in enumeration order, not the strongest ones.
#[derive(Debug, Clone)]
pub struct CandidateAccumulator {
    cap: usize,
    candidates: Vec<CorrelationCandidate>,
}

impl CandidateAccumulator {
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            candidates: Vec::with_capacity(cap.min(1024)),
        }
    }

    /// Store `candidate` if there is room. Returns whether capacity remains
    /// afterwards; a candidate offered to a full accumulator is dropped.
    pub fn try_add(&mut self, candidate: CorrelationCandidate) -> bool {
        if self.is_full() {
            return false;
        }
        self.candidates.push(candidate);
        !self.is_full()
    }

    pub fn is_full(&self) -> bool {
        self.candidates.len() >= self.cap
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn candidates(&self) -> &[CorrelationCandidate] {
        &self.candidates
    }

    pub fn into_candidates(self) -> Vec<CorrelationCandidate> {
        self.candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(lag_days: usize) -> CorrelationCandidate {
        CorrelationCandidate {
            base: "A".into(),
            lagged: "B".into(),
            lag_days,
            coefficient: 0.99,
        }
    }

    #[test]
    fn reports_remaining_capacity() {
        let mut acc = CandidateAccumulator::new(2);
        assert!(acc.try_add(candidate(1)));
        assert!(!acc.try_add(candidate(2)));
        assert!(acc.is_full());

        // Full: further offers are dropped.
        assert!(!acc.try_add(candidate(3)));
        let lags: Vec<usize> = acc.into_candidates().iter().map(|c| c.lag_days).collect();
        assert_eq!(lags, vec![1, 2]);
    }
}
