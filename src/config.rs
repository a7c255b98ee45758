//! Engine configuration.
//!
//! [`EngineConfig`] holds the scoring weights, the recommendation thresholds,
//! the fallback job capacity, and whether the selection façade picks a
//! recommended technician by itself.
//!
//! # Defaults
//!
//! ```
//! use u_assign::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! assert_eq!(config.weights.skills, 50.0);
//! assert_eq!(config.recommendation.min_score, 70);
//! assert_eq!(config.default_max_jobs, 5);
//! assert!(config.auto_recommend);
//! ```
//!
//! # Loading from JSON
//!
//! Missing fields fall back to their defaults.
//!
//! ```
//! use u_assign::config::EngineConfig;
//!
//! let config = EngineConfig::from_json(r#"{ "auto_recommend": false }"#).unwrap();
//! assert!(!config.auto_recommend);
//! assert_eq!(config.recommendation.max_workload, 0.8);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::matching::{RecommendationPolicy, ScoringWeights, MAX_RATING};
use crate::models::DEFAULT_MAX_JOBS;

/// Configuration for scoring, recommendation, and selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Criterion weights of the match scorer.
    pub weights: ScoringWeights,

    /// Thresholds of the recommendation gate.
    pub recommendation: RecommendationPolicy,

    /// Capacity assumed for technicians without a positive `max_jobs`.
    pub default_max_jobs: i32,

    /// Whether a new technician pool auto-selects the top recommended
    /// technician when nothing is selected yet.
    pub auto_recommend: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            recommendation: RecommendationPolicy::default(),
            default_max_jobs: DEFAULT_MAX_JOBS,
            auto_recommend: true,
        }
    }
}

impl EngineConfig {
    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Sets the scoring weights.
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the recommendation thresholds.
    pub fn with_recommendation(mut self, policy: RecommendationPolicy) -> Self {
        self.recommendation = policy;
        self
    }

    /// Sets the fallback job capacity.
    pub fn with_default_max_jobs(mut self, max_jobs: i32) -> Self {
        self.default_max_jobs = max_jobs;
        self
    }

    /// Enables or disables auto-selection of a recommended technician.
    pub fn with_auto_recommend(mut self, enabled: bool) -> Self {
        self.auto_recommend = enabled;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        let w = &self.weights;
        for (name, value) in [
            ("skills", w.skills),
            ("specialization", w.specialization),
            ("rating", w.rating),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("weight '{name}' must be a non-negative number"));
            }
        }
        if w.skills + w.specialization + w.rating <= 0.0 {
            return Err("at least one scoring weight must be positive".into());
        }
        let p = &self.recommendation;
        if p.min_score > 100 {
            return Err("recommendation.min_score must be at most 100".into());
        }
        if !(p.max_workload > 0.0 && p.max_workload <= 1.0) {
            return Err("recommendation.max_workload must be in (0, 1]".into());
        }
        if !(0.0..=MAX_RATING).contains(&p.min_rating) {
            return Err(format!("recommendation.min_rating must be in [0, {MAX_RATING}]"));
        }
        if self.default_max_jobs <= 0 {
            return Err("default_max_jobs must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::default()
            .with_default_max_jobs(8)
            .with_auto_recommend(false)
            .with_recommendation(RecommendationPolicy {
                min_score: 60,
                ..Default::default()
            });
        assert_eq!(config.default_max_jobs, 8);
        assert!(!config.auto_recommend);
        assert_eq!(config.recommendation.min_score, 60);
        assert_eq!(config.recommendation.min_rating, 4.0);
    }

    #[test]
    fn test_from_json_partial() {
        let config =
            EngineConfig::from_json(r#"{"weights":{"rating":40},"default_max_jobs":3}"#).unwrap();
        assert_eq!(config.weights.skills, 50.0);
        assert_eq!(config.weights.rating, 40.0);
        assert_eq!(config.default_max_jobs, 3);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        let err = EngineConfig::from_json(r#"{"default_max_jobs":0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = EngineConfig::from_json(r#"{"weights":{"skills":-1}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = EngineConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_weights_rejected() {
        let config = EngineConfig::default().with_weights(ScoringWeights {
            skills: 0.0,
            specialization: 0.0,
            rating: 0.0,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_workload_bounds() {
        let config = EngineConfig::default().with_recommendation(RecommendationPolicy {
            max_workload: 1.5,
            ..Default::default()
        });
        assert!(config.validate().is_err());
    }
}
