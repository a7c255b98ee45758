//! Match scoring.
//!
//! Computes a 0-100 fitness score for a (technician, requirement) pair from
//! up to three weighted criteria:
//!
//! | Criterion | Default weight | Applies when |
//! |-----------|---------------|--------------|
//! | Skill overlap | 50 | requirement and technician both list skills |
//! | Specialization | 30 | requirement has a service type and technician lists specializations |
//! | Rating | 20 | technician has a rating |
//!
//! Each applicable criterion adds its weight to the denominator, so a
//! technician is judged only on the criteria that apply to them:
//!
//! ```text
//! score = round(sum(contribution) / sum(applicable weight) * 100)
//! ```
//!
//! With no applicable criteria the score is 0.

use serde::{Deserialize, Serialize};

use crate::models::{ServiceRequirement, Technician};

/// Highest rating on the rating scale.
pub const MAX_RATING: f64 = 5.0;

/// Criterion weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub skills: f64,
    pub specialization: f64,
    pub rating: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 50.0,
            specialization: 30.0,
            rating: 20.0,
        }
    }
}

/// Per-criterion contributions. `None` = criterion did not apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: Option<f64>,
    pub specialization: Option<f64>,
    pub rating: Option<f64>,
    /// Sum of the weights of the applicable criteria.
    pub applicable_weight: f64,
}

impl ScoreBreakdown {
    /// Sum of all contributions.
    pub fn total(&self) -> f64 {
        [self.skills, self.specialization, self.rating]
            .into_iter()
            .flatten()
            .sum()
    }

    /// Normalized integer score in `0..=100`.
    pub fn score(&self) -> u8 {
        if self.applicable_weight <= 0.0 {
            return 0;
        }
        let normalized = (self.total() / self.applicable_weight * 100.0).round();
        normalized.clamp(0.0, 100.0) as u8
    }
}

/// Computes the contribution of each criterion.
pub fn breakdown(
    technician: &Technician,
    requirement: &ServiceRequirement,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let mut result = ScoreBreakdown::default();

    if !requirement.required_skills.is_empty() && !technician.skills.is_empty() {
        let matched = requirement
            .required_skills
            .iter()
            .filter(|skill| technician.has_skill(skill))
            .count();
        let ratio = matched as f64 / requirement.required_skills.len() as f64;
        result.skills = Some(ratio * weights.skills);
        result.applicable_weight += weights.skills;
    }

    if let Some(service_type) = requirement.service_type.as_deref() {
        if !technician.specializations.is_empty() {
            let hit = technician.specializes_in(service_type);
            result.specialization = Some(if hit { weights.specialization } else { 0.0 });
            result.applicable_weight += weights.specialization;
        }
    }

    if let Some(rating) = technician.rating.filter(|r| r.is_finite()) {
        let rating = rating.clamp(0.0, MAX_RATING);
        result.rating = Some(rating / MAX_RATING * weights.rating);
        result.applicable_weight += weights.rating;
    }

    result
}

/// Fitness score of a technician for a requirement, in `0..=100`.
pub fn score(
    technician: &Technician,
    requirement: &ServiceRequirement,
    weights: &ScoringWeights,
) -> u8 {
    breakdown(technician, requirement, weights).score()
}
