//! Error types.

use thiserror::Error;

/// Errors raised by [`AssignmentSession`](crate::selection::AssignmentSession).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    #[error("no technician is selected")]
    NoSelection,
    #[error("an assignment for technician '{0}' is already in flight")]
    AlreadyInFlight(String),
    #[error("technician '{0}' is not in the current pool")]
    UnknownTechnician(String),
    #[error("no assignment is in flight")]
    NotInFlight,
    #[error("assignment of technician '{technician_id}' was rejected: {reason}")]
    Rejected {
        technician_id: String,
        reason: String,
    },
}

/// Errors raised while loading an [`EngineConfig`](crate::config::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse engine config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid engine config: {0}")]
    Invalid(String),
}
