//! Selection and assignment façade.
//!
//! [`AssignmentSession`] holds the snapshot the user is looking at (pool,
//! requirement, search/filter), the currently selected technician, and at
//! most one in-flight assignment. It talks to the host only through
//! [`AssignmentEvents`].
//!
//! # Lifecycle
//!
//! ```text
//! set_technicians ─► (auto-select top recommended) ─► select* ─► confirm
//!                                                                  │
//!                      complete(Ok) ◄──── in flight ──────────────┤
//!                      complete(Err) ─► assignment_failed, selection kept
//!                      cancel ─► cancelled
//! ```
//!
//! # Usage
//!
//! ```
//! use u_assign::config::EngineConfig;
//! use u_assign::models::{AssignmentOptions, ServiceOrder, Technician};
//! use u_assign::selection::{AssignmentEvent, AssignmentSession};
//!
//! let events = Vec::<AssignmentEvent>::new();
//! let mut session = AssignmentSession::new(EngineConfig::default(), events);
//! session.set_order(&ServiceOrder::new("SO-1").with_required_skill("brakes"));
//! session.set_technicians(vec![
//!     Technician::new("T1", "Omar").with_skill("brakes").with_rating(4.6),
//! ]);
//! assert_eq!(session.selected_id(), Some("T1"));
//!
//! let request = session.confirm(AssignmentOptions::default()).unwrap();
//! assert_eq!(request.order_id.as_deref(), Some("SO-1"));
//! assert!(session.is_in_flight());
//! session.complete(Ok(())).unwrap();
//! assert!(!session.is_in_flight());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::error::AssignmentError;
use crate::matching::{self, MatchResult};
use crate::models::{
    AssignmentOptions, AssignmentRequest, ServiceOrder, ServiceRequirement, Technician,
};
use crate::ranking::{self, Ranking, RankingEngine, RankingQuery};

/// Events raised to the host application.
pub trait AssignmentEvents {
    /// The selected technician changed.
    fn technician_selected(&mut self, technician: &Technician);

    /// The user confirmed an assignment. The host persists it and reports
    /// back through [`AssignmentSession::complete`].
    fn assign(&mut self, technician_id: &str, request: &AssignmentRequest);

    /// The host reported that persisting the assignment failed.
    fn assignment_failed(&mut self, _technician_id: &str, _reason: &str) {}

    /// The user abandoned the flow.
    fn cancelled(&mut self) {}
}

/// Recorded form of an [`AssignmentEvents`] call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AssignmentEvent {
    TechnicianSelected {
        technician_id: String,
    },
    Assign {
        technician_id: String,
        request: AssignmentRequest,
    },
    AssignmentFailed {
        technician_id: String,
        reason: String,
    },
    Cancelled,
}

/// Queues events for hosts that drain them after each call.
impl AssignmentEvents for Vec<AssignmentEvent> {
    fn technician_selected(&mut self, technician: &Technician) {
        self.push(AssignmentEvent::TechnicianSelected {
            technician_id: technician.id.clone(),
        });
    }

    fn assign(&mut self, technician_id: &str, request: &AssignmentRequest) {
        self.push(AssignmentEvent::Assign {
            technician_id: technician_id.to_string(),
            request: request.clone(),
        });
    }

    fn assignment_failed(&mut self, technician_id: &str, reason: &str) {
        self.push(AssignmentEvent::AssignmentFailed {
            technician_id: technician_id.to_string(),
            reason: reason.to_string(),
        });
    }

    fn cancelled(&mut self) {
        self.push(AssignmentEvent::Cancelled);
    }
}

/// Selection state and assignment confirmation for one service order.
#[derive(Debug)]
pub struct AssignmentSession<E: AssignmentEvents> {
    config: EngineConfig,
    engine: RankingEngine,
    technicians: Vec<Technician>,
    requirement: Option<ServiceRequirement>,
    order_id: Option<String>,
    query: RankingQuery,
    selected: Option<String>,
    in_flight: Option<AssignmentRequest>,
    events: E,
}

impl<E: AssignmentEvents> AssignmentSession<E> {
    /// Creates an empty session.
    pub fn new(config: EngineConfig, events: E) -> Self {
        Self {
            config,
            engine: RankingEngine::standard(),
            technicians: Vec::new(),
            requirement: None,
            order_id: None,
            query: RankingQuery::default(),
            selected: None,
            in_flight: None,
            events,
        }
    }

    /// Replaces the ranking rule chain.
    pub fn with_engine(mut self, engine: RankingEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn technicians(&self) -> &[Technician] {
        &self.technicians
    }

    pub fn requirement(&self) -> Option<&ServiceRequirement> {
        self.requirement.as_ref()
    }

    pub fn query(&self) -> &RankingQuery {
        &self.query
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    pub fn into_events(self) -> E {
        self.events
    }

    /// Replaces the technician snapshot.
    ///
    /// A selection whose technician left the pool is dropped. With nothing
    /// selected and `auto_recommend` on, the top recommended technician
    /// (ignoring search and filter) becomes the selection.
    pub fn set_technicians(&mut self, technicians: Vec<Technician>) {
        self.technicians = technicians;

        if let Some(id) = self.selected.as_deref() {
            if self.find(id).is_none() {
                debug!(technician = %id, "selected technician left the pool");
                self.selected = None;
            }
        }

        if self.selected.is_none() && self.config.auto_recommend {
            let top = ranking::rank_with(
                &self.engine,
                &self.technicians,
                self.requirement.as_ref(),
                &RankingQuery::default(),
                &self.config,
            )
            .top_recommended()
            .map(|c| c.technician.id.clone());

            if let Some(id) = top {
                debug!(technician = %id, "auto-selected recommended technician");
                self.apply_selection(id);
            }
        }
    }

    /// Sets (or clears) the requirement the pool is scored against.
    ///
    /// The requirement is not tied to an order, so any order ID from an
    /// earlier [`set_order`](Self::set_order) is dropped.
    pub fn set_requirement(&mut self, requirement: Option<ServiceRequirement>) {
        self.requirement = requirement;
        self.order_id = None;
    }

    /// Scores against a service order and tags assignments with its ID.
    pub fn set_order(&mut self, order: &ServiceOrder) {
        self.order_id = Some(order.id.clone());
        self.requirement = Some(ServiceRequirement::from_order(order));
    }

    /// Sets the search/filter state.
    pub fn set_query(&mut self, query: RankingQuery) {
        self.query = query;
    }

    /// Ranks the current snapshot.
    pub fn ranking(&self) -> Ranking<'_> {
        ranking::rank_with(
            &self.engine,
            &self.technicians,
            self.requirement.as_ref(),
            &self.query,
            &self.config,
        )
    }

    /// Match result of a technician in the current snapshot.
    pub fn evaluate(&self, technician_id: &str) -> Option<MatchResult> {
        self.find(technician_id)
            .map(|t| matching::evaluate(t, self.requirement.as_ref(), &self.config))
    }

    /// Selects a technician by ID.
    pub fn select(&mut self, technician_id: &str) -> Result<(), AssignmentError> {
        if self.find(technician_id).is_none() {
            return Err(AssignmentError::UnknownTechnician(technician_id.to_string()));
        }
        if self.selected.as_deref() != Some(technician_id) {
            self.apply_selection(technician_id.to_string());
        }
        Ok(())
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected technician.
    pub fn selected(&self) -> Option<&Technician> {
        self.selected.as_deref().and_then(|id| self.find(id))
    }

    /// Whether confirmation is currently possible.
    pub fn can_confirm(&self) -> bool {
        self.selected.is_some() && self.in_flight.is_none()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The request awaiting the host's answer.
    pub fn pending(&self) -> Option<&AssignmentRequest> {
        self.in_flight.as_ref()
    }

    /// Confirms the selection and emits exactly one `assign` event.
    ///
    /// Rejected without side effects when nothing is selected or another
    /// assignment is still in flight.
    pub fn confirm(
        &mut self,
        options: AssignmentOptions,
    ) -> Result<AssignmentRequest, AssignmentError> {
        if let Some(pending) = &self.in_flight {
            debug!(technician = %pending.technician_id, "confirmation ignored: already in flight");
            return Err(AssignmentError::AlreadyInFlight(pending.technician_id.clone()));
        }
        let technician_id = self.selected.clone().ok_or(AssignmentError::NoSelection)?;

        let request = AssignmentRequest::new(&technician_id, self.order_id.clone(), options);
        info!(
            technician = %technician_id,
            order = ?self.order_id,
            notify = request.notify_technician,
            "assignment confirmed"
        );
        self.in_flight = Some(request.clone());
        self.events.assign(&technician_id, &request);
        Ok(request)
    }

    /// Reports the host's outcome for the in-flight assignment.
    ///
    /// On failure the selection is kept so the user can retry.
    pub fn complete(
        &mut self,
        outcome: Result<(), String>,
    ) -> Result<AssignmentRequest, AssignmentError> {
        let request = self.in_flight.take().ok_or(AssignmentError::NotInFlight)?;
        match outcome {
            Ok(()) => {
                info!(technician = %request.technician_id, "assignment stored");
                Ok(request)
            }
            Err(reason) => {
                warn!(technician = %request.technician_id, %reason, "assignment rejected");
                self.events
                    .assignment_failed(&request.technician_id, &reason);
                Err(AssignmentError::Rejected {
                    technician_id: request.technician_id,
                    reason,
                })
            }
        }
    }

    /// Abandons the flow, discarding any in-flight request.
    pub fn cancel(&mut self) -> Option<AssignmentRequest> {
        let discarded = self.in_flight.take();
        debug!(discarded = discarded.is_some(), "assignment flow cancelled");
        self.events.cancelled();
        discarded
    }

    fn find(&self, technician_id: &str) -> Option<&Technician> {
        self.technicians.iter().find(|t| t.id == technician_id)
    }

    fn apply_selection(&mut self, technician_id: String) {
        if let Some(technician) = self.technicians.iter().find(|t| t.id == technician_id) {
            debug!(technician = %technician_id, "technician selected");
            self.events.technician_selected(technician);
            self.selected = Some(technician_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TechnicianStatus;
    use crate::ranking::{CandidateFilter, RankingState};

    type Session = AssignmentSession<Vec<AssignmentEvent>>;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn pool() -> Vec<Technician> {
        vec![
            Technician::new("T1", "Omar")
                .with_skill("engine")
                .with_rating(3.0),
            Technician::new("T2", "Sara")
                .with_skills(["brakes", "electrical"])
                .with_specialization("brake_service")
                .with_rating(4.8),
            Technician::new("T3", "Ali")
                .with_skills(["brakes", "electrical"])
                .with_rating(4.9)
                .with_status(TechnicianStatus::Busy),
        ]
    }

    fn order() -> ServiceOrder {
        ServiceOrder::new("SO-7")
            .with_service_type("brake_service")
            .with_required_skill("brakes")
            .with_required_skill("electrical")
    }

    fn session(auto: bool) -> Session {
        let mut s = Session::new(EngineConfig::default().with_auto_recommend(auto), Vec::new());
        s.set_order(&order());
        s
    }

    fn assign_count(s: &Session) -> usize {
        s.events()
            .iter()
            .filter(|e| matches!(e, AssignmentEvent::Assign { .. }))
            .count()
    }

    #[test]
    fn test_auto_select_top_recommended() {
        let mut s = session(true);
        s.set_technicians(pool());
        assert_eq!(s.selected_id(), Some("T2"));
        assert_eq!(
            s.events(),
            &vec![AssignmentEvent::TechnicianSelected {
                technician_id: "T2".into()
            }]
        );
    }

    #[test]
    fn test_auto_select_disabled() {
        let mut s = session(false);
        s.set_technicians(pool());
        assert_eq!(s.selected_id(), None);
        assert!(s.events().is_empty());
    }

    #[test]
    fn test_auto_select_ignores_query() {
        let mut s = session(true);
        s.set_query(RankingQuery::default().with_filter(CandidateFilter::Busy));
        s.set_technicians(pool());
        assert_eq!(s.selected_id(), Some("T2"));
        assert_eq!(s.ranking().ids(), vec!["T3"]);
    }

    #[test]
    fn test_user_override_survives_pool_refresh() {
        let mut s = session(true);
        s.set_technicians(pool());
        s.select("T1").unwrap();
        s.set_technicians(pool());
        assert_eq!(s.selected_id(), Some("T1"));
    }

    #[test]
    fn test_selection_dropped_when_technician_leaves() {
        let mut s = session(false);
        s.set_technicians(pool());
        s.select("T3").unwrap();
        s.set_technicians(pool().into_iter().filter(|t| t.id != "T3").collect());
        assert_eq!(s.selected_id(), None);
    }

    #[test]
    fn test_select_unknown() {
        let mut s = session(false);
        s.set_technicians(pool());
        assert_eq!(
            s.select("T9"),
            Err(AssignmentError::UnknownTechnician("T9".into()))
        );
    }

    #[test]
    fn test_reselect_emits_once() {
        let mut s = session(false);
        s.set_technicians(pool());
        s.select("T1").unwrap();
        s.select("T1").unwrap();
        assert_eq!(s.events().len(), 1);
        assert_eq!(s.selected().map(|t| t.name.as_str()), Some("Omar"));
    }

    #[test]
    fn test_confirm_without_selection() {
        let mut s = session(false);
        s.set_technicians(pool());
        assert!(!s.can_confirm());
        assert_eq!(
            s.confirm(AssignmentOptions::default()),
            Err(AssignmentError::NoSelection)
        );
        assert_eq!(assign_count(&s), 0);
    }

    #[test]
    fn test_double_confirm_emits_one_assign() {
        init_tracing();
        let mut s = session(true);
        s.set_technicians(pool());

        let first = s.confirm(AssignmentOptions::default().with_notes("bay 3"));
        let second = s.confirm(AssignmentOptions::default());

        let request = first.unwrap();
        assert_eq!(request.technician_id, "T2");
        assert_eq!(request.order_id.as_deref(), Some("SO-7"));
        assert_eq!(request.notes.as_deref(), Some("bay 3"));
        assert_eq!(second, Err(AssignmentError::AlreadyInFlight("T2".into())));
        assert_eq!(assign_count(&s), 1);
        assert!(!s.can_confirm());
    }

    #[test]
    fn test_success_clears_in_flight() {
        let mut s = session(true);
        s.set_technicians(pool());
        s.confirm(AssignmentOptions::default()).unwrap();

        let stored = s.complete(Ok(())).unwrap();
        assert_eq!(stored.technician_id, "T2");
        assert!(!s.is_in_flight());
        assert_eq!(s.complete(Ok(())), Err(AssignmentError::NotInFlight));
    }

    #[test]
    fn test_failure_keeps_selection_for_retry() {
        init_tracing();
        let mut s = session(true);
        s.set_technicians(pool());
        s.confirm(AssignmentOptions::default()).unwrap();

        let err = s.complete(Err("conflict".into())).unwrap_err();
        assert_eq!(
            err,
            AssignmentError::Rejected {
                technician_id: "T2".into(),
                reason: "conflict".into()
            }
        );
        assert!(!s.is_in_flight());
        assert_eq!(s.selected_id(), Some("T2"));
        assert!(s.events().contains(&AssignmentEvent::AssignmentFailed {
            technician_id: "T2".into(),
            reason: "conflict".into()
        }));

        s.confirm(AssignmentOptions::default()).unwrap();
        assert_eq!(assign_count(&s), 2);
    }

    #[test]
    fn test_set_requirement_drops_previous_order() {
        let mut s = session(false);
        s.set_requirement(Some(ServiceRequirement::new().with_skill("engine")));
        s.set_technicians(pool());
        s.select("T1").unwrap();

        let request = s.confirm(AssignmentOptions::default()).unwrap();
        assert_eq!(request.order_id, None);
        assert_eq!(s.requirement().map(|r| r.required_skills.len()), Some(1));
    }

    #[derive(Default)]
    struct AssignOnly {
        assigned: usize,
    }

    impl AssignmentEvents for AssignOnly {
        fn technician_selected(&mut self, _technician: &Technician) {}

        fn assign(&mut self, _technician_id: &str, _request: &AssignmentRequest) {
            self.assigned += 1;
        }
    }

    #[test]
    fn test_default_event_hooks_are_noops() {
        let mut s = AssignmentSession::new(EngineConfig::default(), AssignOnly::default());
        s.set_order(&order());
        s.set_technicians(pool());
        s.confirm(AssignmentOptions::default()).unwrap();

        assert!(s.complete(Err("offline".into())).is_err());
        assert_eq!(s.selected_id(), Some("T2"));
        assert!(s.cancel().is_none());
        assert_eq!(s.events().assigned, 1);
    }

    #[test]
    fn test_cancel_discards_pending() {
        let mut s = session(true);
        s.set_technicians(pool());
        s.confirm(AssignmentOptions::default()).unwrap();

        let discarded = s.cancel();
        assert_eq!(discarded.map(|r| r.technician_id), Some("T2".to_string()));
        assert!(!s.is_in_flight());
        assert_eq!(s.events().last(), Some(&AssignmentEvent::Cancelled));
        assert!(s.cancel().is_none());
    }

    #[test]
    fn test_ranking_states_through_session() {
        let mut s = session(false);
        assert_eq!(s.ranking().state(), RankingState::NoTechnicians);

        s.set_technicians(pool());
        assert_eq!(s.ranking().state(), RankingState::Ready);

        s.set_query(RankingQuery::default().with_search("nobody"));
        assert_eq!(s.ranking().state(), RankingState::NoMatches);

        s.set_query(RankingQuery::default().with_filter(CandidateFilter::Busy));
        assert_eq!(s.ranking().state(), RankingState::NoneRecommended);
    }

    #[test]
    fn test_requirement_absent_degrades() {
        let mut s = Session::new(EngineConfig::default(), Vec::new());
        s.set_technicians(vec![Technician::new("T1", "Omar").with_skill("engine")]);
        let ranking = s.ranking();
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking.candidates[0].result.score, 0);
        assert_eq!(s.evaluate("T1").map(|r| r.score), Some(0));
        assert!(s.evaluate("nope").is_none());
    }

    #[test]
    fn test_event_serializes_tagged() {
        let event = AssignmentEvent::TechnicianSelected {
            technician_id: "T1".into(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event"], "technician_selected");
        assert_eq!(value["technician_id"], "T1");
    }
}
