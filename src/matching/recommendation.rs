//! Recommendation gate.
//!
//! A technician is *recommended* only when every gate passes. This is a
//! hard conjunction, not a ranking signal: it marks a short, trustworthy
//! subset of the ranked list.

use serde::{Deserialize, Serialize};

use crate::models::{Technician, TechnicianStatus};

/// Thresholds of the recommendation gate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationPolicy {
    /// Minimum fitness score (inclusive).
    pub min_score: u8,
    /// Workload ratio must stay strictly below this.
    pub max_workload: f64,
    /// Minimum rating (inclusive). Unrated technicians never pass.
    pub min_rating: f64,
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        Self {
            min_score: 70,
            max_workload: 0.80,
            min_rating: 4.0,
        }
    }
}

/// Which gate rejected a candidate, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateFailure {
    LowScore,
    NotAvailable,
    Overloaded,
    Unrated,
    LowRating,
}

impl RecommendationPolicy {
    /// Returns the first gate the candidate fails, or `None` if it passes all.
    pub fn first_failure(
        &self,
        technician: &Technician,
        score: u8,
        workload_ratio: f64,
    ) -> Option<GateFailure> {
        if score < self.min_score {
            return Some(GateFailure::LowScore);
        }
        if technician.status != TechnicianStatus::Available {
            return Some(GateFailure::NotAvailable);
        }
        if workload_ratio >= self.max_workload {
            return Some(GateFailure::Overloaded);
        }
        match technician.rating {
            None => Some(GateFailure::Unrated),
            Some(r) if r.is_nan() || r < self.min_rating => Some(GateFailure::LowRating),
            Some(_) => None,
        }
    }

    /// Whether the candidate passes every gate.
    pub fn is_recommended(&self, technician: &Technician, score: u8, workload_ratio: f64) -> bool {
        self.first_failure(technician, score, workload_ratio).is_none()
    }
}
