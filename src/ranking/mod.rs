//! Ranking pipeline.
//!
//! Turns a technician pool into the ordered list the user picks from:
//!
//! 1. **Search**: case-insensitive substring over name, localized name,
//!    title, and skills.
//! 2. **Filter**: `all`, `available`, `busy`, or `recommended`.
//! 3. **Sort**: a [`RankingEngine`] tie-break chain. The standard chain is
//!    recommended first, then higher score, then more available status.
//!
//! # Usage
//!
//! ```
//! use u_assign::config::EngineConfig;
//! use u_assign::models::{ServiceRequirement, Technician, TechnicianStatus};
//! use u_assign::ranking::{rank, CandidateFilter, RankingQuery, RankingState};
//!
//! let pool = vec![
//!     Technician::new("T1", "Omar").with_rating(3.0),
//!     Technician::new("T2", "Sara").with_rating(4.8),
//!     Technician::new("T3", "Ali").with_status(TechnicianStatus::Busy),
//! ];
//! let requirement = ServiceRequirement::new().with_skill("brakes");
//! let query = RankingQuery::default();
//! let ranking = rank(&pool, Some(&requirement), &query, &EngineConfig::default());
//!
//! assert_eq!(ranking.ids(), vec!["T2", "T1", "T3"]);
//! assert_eq!(ranking.state(), RankingState::Ready);
//!
//! let busy_only = RankingQuery::default().with_filter(CandidateFilter::Busy);
//! let ranking = rank(&pool, Some(&requirement), &busy_only, &EngineConfig::default());
//! assert_eq!(ranking.ids(), vec!["T3"]);
//! ```

mod engine;
pub mod rules;

pub use engine::{RankingEngine, TieBreaker};

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::debug;

use crate::config::EngineConfig;
use crate::matching::{self, MatchResult};
use crate::models::{ServiceRequirement, Technician, TechnicianStatus};

/// Key returned by a ranking rule. Lower keys are listed first.
pub type RankKey = f64;

/// A rule that contributes one link of the tie-break chain.
pub trait RankingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SCORE").
    fn name(&self) -> &'static str;

    /// Returns a key where lower = listed earlier.
    fn evaluate(&self, candidate: &Candidate<'_>) -> RankKey;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// A technician paired with its match result.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'a> {
    pub technician: &'a Technician,
    pub result: MatchResult,
}

/// Category filter applied after search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateFilter {
    #[default]
    All,
    Available,
    Busy,
    Recommended,
}

impl CandidateFilter {
    /// Whether a candidate passes this filter.
    pub fn accepts(self, candidate: &Candidate<'_>) -> bool {
        match self {
            CandidateFilter::All => true,
            CandidateFilter::Available => {
                candidate.technician.status == TechnicianStatus::Available
            }
            CandidateFilter::Busy => candidate.technician.status == TechnicianStatus::Busy,
            CandidateFilter::Recommended => candidate.result.recommended,
        }
    }
}

/// UI-level search and filter state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingQuery {
    /// Free-text search. Blank = no search.
    pub search: String,
    pub filter: CandidateFilter,
}

impl RankingQuery {
    /// Sets the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sets the category filter.
    pub fn with_filter(mut self, filter: CandidateFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Whether the query narrows the pool at all.
    pub fn is_unfiltered(&self) -> bool {
        self.search.trim().is_empty() && self.filter == CandidateFilter::All
    }

    fn needle(&self) -> String {
        self.search.trim().to_lowercase()
    }
}

/// What the host should show for a ranking result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingState {
    /// The pool itself is empty.
    NoTechnicians,
    /// The pool has technicians but none pass the search/filter.
    NoMatches,
    /// Matches exist, none of them recommended.
    NoneRecommended,
    /// At least one recommended match.
    Ready,
}

/// Ordered, filtered candidates of one ranking pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking<'a> {
    /// Candidates, best first.
    pub candidates: Vec<Candidate<'a>>,
    /// Size of the pool before search/filter.
    pub pool_size: usize,
}

impl<'a> Ranking<'a> {
    /// Classifies the result for the host's empty/partial states.
    pub fn state(&self) -> RankingState {
        if self.pool_size == 0 {
            RankingState::NoTechnicians
        } else if self.candidates.is_empty() {
            RankingState::NoMatches
        } else if self.candidates.iter().any(|c| c.result.recommended) {
            RankingState::Ready
        } else {
            RankingState::NoneRecommended
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Technician IDs in ranked order.
    pub fn ids(&self) -> Vec<&'a str> {
        self.candidates
            .iter()
            .map(|c| c.technician.id.as_str())
            .collect()
    }

    /// Recommended candidates in ranked order.
    pub fn recommended(&self) -> impl Iterator<Item = &Candidate<'a>> {
        self.candidates.iter().filter(|c| c.result.recommended)
    }

    /// The best recommended candidate.
    pub fn top_recommended(&self) -> Option<&Candidate<'a>> {
        self.recommended().next()
    }
}

/// Ranks a pool with the standard rule chain.
pub fn rank<'a>(
    technicians: &'a [Technician],
    requirement: Option<&ServiceRequirement>,
    query: &RankingQuery,
    config: &EngineConfig,
) -> Ranking<'a> {
    rank_with(&RankingEngine::standard(), technicians, requirement, query, config)
}

/// Ranks a pool with a custom rule chain.
pub fn rank_with<'a>(
    engine: &RankingEngine,
    technicians: &'a [Technician],
    requirement: Option<&ServiceRequirement>,
    query: &RankingQuery,
    config: &EngineConfig,
) -> Ranking<'a> {
    let needle = query.needle();

    let mut candidates: Vec<Candidate<'a>> = technicians
        .iter()
        .filter(|t| t.matches_text(&needle))
        .map(|t| Candidate {
            technician: t,
            result: matching::evaluate(t, requirement, config),
        })
        .filter(|c| query.filter.accepts(c))
        .collect();

    engine.sort(&mut candidates);

    let ranking = Ranking {
        candidates,
        pool_size: technicians.len(),
    };

    debug!(
        pool = ranking.pool_size,
        matched = ranking.len(),
        recommended = ranking.recommended().count(),
        filter = ?query.filter,
        state = ?ranking.state(),
        "ranked technicians"
    );

    ranking
}
