//! Technician assignment recommendation for workshop service orders.
//!
//! Given a service order and a pool of technicians, scores each technician,
//! marks the ones that qualify as recommended, and produces a deterministic
//! ranked list for the user to pick from. A selection façade then turns the
//! user's pick into an assignment request for the host to persist.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Technician`, `ServiceOrder`,
//!   `ServiceRequirement`, `AssignmentRequest`
//! - **`matching`**: Workload ratio, fitness score, recommendation gate
//! - **`ranking`**: Search, category filter, tie-break rule chain
//! - **`selection`**: Selected technician, in-flight confirmation, host events
//! - **`config`**: Weights and thresholds, loadable from JSON
//! - **`validation`**: Technician pool integrity checks
//! - **`presentation`**: Locale-aware labels (kept out of the core)
//!
//! # Architecture
//!
//! Everything except `selection` is a pure function of a snapshot. Nothing
//! here performs I/O; persistence and transport belong to the host.

pub mod config;
pub mod error;
pub mod matching;
pub mod models;
pub mod presentation;
pub mod ranking;
pub mod selection;
pub mod validation;

pub use config::EngineConfig;
pub use error::{AssignmentError, ConfigError};
pub use matching::{evaluate, is_recommended, score, MatchResult};
pub use ranking::{rank, Ranking, RankingQuery, RankingState};
pub use selection::{AssignmentEvent, AssignmentEvents, AssignmentSession};
