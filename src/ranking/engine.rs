//! Rule engine for ordering candidates.
//!
//! Applies ranking rules as a tie-break chain: the next rule is consulted
//! only when every earlier rule ties. The sort is stable, so candidates tied
//! on every rule keep their input order unless a final tie-breaker is set.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, Candidate, RankingRule};

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep input order (default).
    #[default]
    InputOrder,
    /// Deterministic by technician ID (lexicographic).
    ById,
}

/// A composable engine for candidate ordering.
///
/// # Example
/// ```
/// use u_assign::ranking::{rules, RankingEngine};
///
/// let engine = RankingEngine::new()
///     .with_rule(rules::Recommended)
///     .with_tie_breaker(rules::HighestScore)
///     .with_tie_breaker(rules::LeastLoaded);
/// assert_eq!(engine.rule_names(), vec!["RECOMMENDED", "SCORE", "LEAST_LOADED"]);
/// ```
#[derive(Clone)]
pub struct RankingEngine {
    rules: Vec<Arc<dyn RankingRule>>,
    tie_breaker: TieBreaker,
    epsilon: f64,
}

impl RankingEngine {
    /// Creates an empty engine (keeps input order).
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::InputOrder,
            epsilon: 1e-9,
        }
    }

    /// The standard chain: recommended first, then score, then availability.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(rules::Recommended)
            .with_tie_breaker(rules::HighestScore)
            .with_tie_breaker(rules::Availability)
    }

    /// Adds the primary rule (or the next rule of the chain).
    pub fn with_rule<R: RankingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule consulted only when all earlier rules tie.
    pub fn with_tie_breaker<R: RankingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the rules in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts candidates in place (first = best).
    pub fn sort(&self, candidates: &mut [Candidate<'_>]) {
        candidates.sort_by(|a, b| self.compare(a, b));
    }

    fn compare(&self, a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
        for rule in &self.rules {
            let key_a = rule.evaluate(a);
            let key_b = rule.evaluate(b);

            if (key_a - key_b).abs() > self.epsilon {
                return key_a.partial_cmp(&key_b).unwrap_or(Ordering::Equal);
            }
        }

        match self.tie_breaker {
            TieBreaker::InputOrder => Ordering::Equal,
            TieBreaker::ById => a.technician.id.cmp(&b.technician.id),
        }
    }
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for RankingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RankingEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
