//! Technician-to-requirement matching.
//!
//! Combines workload, fitness score, and the recommendation gate into a
//! [`MatchResult`] per technician. Everything here is a pure function of the
//! current snapshot; results are recomputed on every call.
//!
//! # Usage
//!
//! ```
//! use u_assign::config::EngineConfig;
//! use u_assign::matching;
//! use u_assign::models::{ServiceRequirement, Technician};
//!
//! let requirement = ServiceRequirement::new()
//!     .with_skill("brakes")
//!     .with_service_type("brake_service");
//! let technician = Technician::new("T1", "Omar")
//!     .with_skill("brakes")
//!     .with_specialization("brake_service")
//!     .with_rating(4.5);
//!
//! let result = matching::evaluate(&technician, Some(&requirement), &EngineConfig::default());
//! assert_eq!(result.score, 98);
//! assert!(result.recommended);
//! ```

mod recommendation;
mod scorer;
mod workload;

pub use recommendation::{GateFailure, RecommendationPolicy};
pub use scorer::{breakdown, ScoreBreakdown, ScoringWeights, MAX_RATING};
pub use workload::{technician_workload, workload_percent, workload_ratio};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::EngineConfig;
use crate::models::{ServiceRequirement, Technician};

/// Evaluation of one technician against one requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub technician_id: String,
    /// Fitness score in `0..=100`.
    pub score: u8,
    /// Whether every recommendation gate passed.
    pub recommended: bool,
    /// Load ratio in `[0, 1]`.
    pub workload_ratio: f64,
    pub breakdown: ScoreBreakdown,
}

impl MatchResult {
    /// Workload as a whole percentage.
    pub fn workload_percent(&self) -> u8 {
        (self.workload_ratio * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Fitness score of a technician. A missing or empty requirement scores 0.
pub fn score(
    technician: &Technician,
    requirement: Option<&ServiceRequirement>,
    config: &EngineConfig,
) -> u8 {
    criteria(technician, requirement, config).score()
}

/// Whether a technician passes the recommendation gate.
pub fn is_recommended(
    technician: &Technician,
    requirement: Option<&ServiceRequirement>,
    config: &EngineConfig,
) -> bool {
    evaluate(technician, requirement, config).recommended
}

/// Scores a technician and applies the recommendation gate.
pub fn evaluate(
    technician: &Technician,
    requirement: Option<&ServiceRequirement>,
    config: &EngineConfig,
) -> MatchResult {
    let breakdown = criteria(technician, requirement, config);
    let score = breakdown.score();
    let workload_ratio = technician_workload(technician, config.default_max_jobs);
    let failure = config
        .recommendation
        .first_failure(technician, score, workload_ratio);

    trace!(
        technician = %technician.id,
        score,
        workload_ratio,
        ?failure,
        "evaluated technician"
    );

    MatchResult {
        technician_id: technician.id.clone(),
        score,
        recommended: failure.is_none(),
        workload_ratio,
        breakdown,
    }
}

fn criteria(
    technician: &Technician,
    requirement: Option<&ServiceRequirement>,
    config: &EngineConfig,
) -> ScoreBreakdown {
    match requirement {
        Some(req) if !req.is_empty() => scorer::breakdown(technician, req, &config.weights),
        _ => ScoreBreakdown::default(),
    }
}

/// Evaluates every technician, preserving input order.
pub fn evaluate_all(
    technicians: &[Technician],
    requirement: Option<&ServiceRequirement>,
    config: &EngineConfig,
) -> Vec<MatchResult> {
    technicians
        .iter()
        .map(|t| evaluate(t, requirement, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TechnicianStatus;
    use proptest::prelude::*;

    fn brake_requirement() -> ServiceRequirement {
        ServiceRequirement::new()
            .with_skill("brakes")
            .with_skill("electrical")
            .with_service_type("brake_service")
    }

    #[test]
    fn test_full_profile_is_recommended() {
        let t = Technician::new("T1", "A")
            .with_skills(["brakes", "electrical", "engine"])
            .with_specialization("brake_service")
            .with_rating(5.0)
            .with_jobs(1, 5);
        let r = evaluate(&t, Some(&brake_requirement()), &EngineConfig::default());
        assert_eq!(r.score, 100);
        assert!(r.recommended);
        assert!((r.workload_ratio - 0.2).abs() < 1e-12);
        assert_eq!(r.workload_percent(), 20);
    }

    #[test]
    fn test_busy_high_scorer_not_recommended() {
        // skills 50 + specialization 30 + rating 4.5/5*20=18 → 98
        let t = Technician::new("T2", "B")
            .with_skills(["brakes", "electrical"])
            .with_specialization("brake_service")
            .with_rating(4.5)
            .with_jobs(2, 4)
            .with_status(TechnicianStatus::Busy);
        let r = evaluate(&t, Some(&brake_requirement()), &EngineConfig::default());
        assert!(r.score >= 70);
        assert_eq!(r.workload_ratio, 0.5);
        assert!(!r.recommended);
    }

    #[test]
    fn test_no_requirement_degrades_gracefully() {
        let t = Technician::new("T3", "C").with_skill("engine").with_rating(5.0);
        let r = evaluate(&t, None, &EngineConfig::default());
        assert_eq!(r.score, 0);
        assert!(!r.recommended);
        assert_eq!(r.breakdown, ScoreBreakdown::default());
        assert_eq!(score(&t, Some(&ServiceRequirement::new()), &EngineConfig::default()), 0);
    }

    #[test]
    fn test_skills_only_requirement_scores_rating() {
        // technician lists no skills: only the rating criterion applies
        let t = Technician::new("T4", "D").with_rating(4.0);
        let req = ServiceRequirement::new().with_skill("brakes");
        assert_eq!(score(&t, Some(&req), &EngineConfig::default()), 80);
    }

    #[test]
    fn test_evaluate_all_preserves_order() {
        let pool = vec![Technician::new("B", "b"), Technician::new("A", "a")];
        let results = evaluate_all(&pool, None, &EngineConfig::default());
        let ids: Vec<&str> = results.iter().map(|r| r.technician_id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
    }

    fn arb_status() -> impl Strategy<Value = TechnicianStatus> {
        prop_oneof![
            Just(TechnicianStatus::Available),
            Just(TechnicianStatus::Break),
            Just(TechnicianStatus::Busy),
            Just(TechnicianStatus::Offline),
        ]
    }

    fn arb_technician() -> impl Strategy<Value = Technician> {
        (
            prop::collection::btree_set("[a-e]", 0..4),
            prop::collection::btree_set("svc_[a-c]", 0..3),
            prop::option::of(-1.0f64..6.0),
            -2i32..12,
            prop::option::of(-1i32..8),
            arb_status(),
        )
            .prop_map(|(skills, specs, rating, current, max, status)| {
                let mut t = Technician::new("T", "t").with_status(status);
                t.skills = skills;
                t.specializations = specs;
                t.rating = rating;
                t.current_jobs = current;
                t.max_jobs = max;
                t
            })
    }

    fn arb_requirement() -> impl Strategy<Value = ServiceRequirement> {
        (
            prop::collection::btree_set("[a-e]", 0..4),
            prop::option::of("svc_[a-c]"),
        )
            .prop_map(|(skills, service_type)| ServiceRequirement {
                required_skills: skills,
                service_type,
                ..Default::default()
            })
    }

    proptest! {
        #[test]
        fn prop_score_and_workload_in_range(t in arb_technician(), req in arb_requirement()) {
            let r = evaluate(&t, Some(&req), &EngineConfig::default());
            prop_assert!(r.score <= 100);
            prop_assert!((0.0..=1.0).contains(&r.workload_ratio));
        }

        #[test]
        fn prop_recommended_iff_all_gates(t in arb_technician(), req in arb_requirement()) {
            let r = evaluate(&t, Some(&req), &EngineConfig::default());
            let gates = r.score >= 70
                && t.status == TechnicianStatus::Available
                && r.workload_ratio < 0.80
                && t.rating.is_some_and(|x| x >= 4.0);
            prop_assert_eq!(r.recommended, gates);
        }
    }
}
