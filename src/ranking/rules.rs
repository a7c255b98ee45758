//! Built-in ranking rules.
//!
//! # Categories
//!
//! - **Gate**: RECOMMENDED
//! - **Fitness**: SCORE
//! - **Availability**: AVAILABILITY, EARLIEST_FREE
//! - **Load**: LEAST_LOADED
//!
//! # Key Convention
//! All rules return lower keys for candidates that should be listed first.

use super::{Candidate, RankKey, RankingRule};

/// Recommended candidates first.
#[derive(Debug, Clone, Copy)]
pub struct Recommended;

impl RankingRule for Recommended {
    fn name(&self) -> &'static str {
        "RECOMMENDED"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> RankKey {
        if candidate.result.recommended {
            0.0
        } else {
            1.0
        }
    }

    fn description(&self) -> &'static str {
        "Recommended First"
    }
}

/// Higher fitness score first.
#[derive(Debug, Clone, Copy)]
pub struct HighestScore;

impl RankingRule for HighestScore {
    fn name(&self) -> &'static str {
        "SCORE"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> RankKey {
        -f64::from(candidate.result.score)
    }

    fn description(&self) -> &'static str {
        "Highest Fitness Score"
    }
}

/// More available status first: available, break, busy, offline.
#[derive(Debug, Clone, Copy)]
pub struct Availability;

impl RankingRule for Availability {
    fn name(&self) -> &'static str {
        "AVAILABILITY"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> RankKey {
        f64::from(candidate.technician.status.availability_rank())
    }

    fn description(&self) -> &'static str {
        "Most Available Status"
    }
}

/// Lower workload ratio first.
#[derive(Debug, Clone, Copy)]
pub struct LeastLoaded;

impl RankingRule for LeastLoaded {
    fn name(&self) -> &'static str {
        "LEAST_LOADED"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> RankKey {
        candidate.result.workload_ratio
    }

    fn description(&self) -> &'static str {
        "Least Loaded"
    }
}

/// Sooner `next_available` first.
///
/// Technicians that are available right now count as free immediately;
/// anyone else without a `next_available` goes last.
#[derive(Debug, Clone, Copy)]
pub struct EarliestFree;

impl RankingRule for EarliestFree {
    fn name(&self) -> &'static str {
        "EARLIEST_FREE"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> RankKey {
        let technician = candidate.technician;
        if technician.is_available() {
            return f64::MIN;
        }
        technician
            .next_available
            .map(|at| at.timestamp_millis() as f64)
            .unwrap_or(f64::MAX)
    }

    fn description(&self) -> &'static str {
        "Earliest Free"
    }
}
