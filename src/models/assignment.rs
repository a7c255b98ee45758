//! Assignment request model.
//!
//! The only thing the engine writes out: a request to assign one technician
//! to a service order, handed to the host for persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to assign a technician, emitted on confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRequest {
    /// Assigned technician ID.
    pub technician_id: String,
    /// Service order this assignment is for, when known.
    pub order_id: Option<String>,
    /// When work is expected to start.
    pub expected_start_time: Option<DateTime<Utc>>,
    /// Free-form notes for the technician.
    pub notes: Option<String>,
    /// Whether the host should notify the technician.
    pub notify_technician: bool,
}

/// User-entered details attached to a confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentOptions {
    pub expected_start_time: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub notify_technician: bool,
}

impl Default for AssignmentOptions {
    fn default() -> Self {
        Self {
            expected_start_time: None,
            notes: None,
            notify_technician: true,
        }
    }
}

impl AssignmentOptions {
    /// Sets the expected start time.
    pub fn with_expected_start(mut self, at: DateTime<Utc>) -> Self {
        self.expected_start_time = Some(at);
        self
    }

    /// Sets notes. Blank notes are dropped.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = (!notes.trim().is_empty()).then_some(notes);
        self
    }

    /// Sets whether the technician gets notified.
    pub fn with_notification(mut self, notify: bool) -> Self {
        self.notify_technician = notify;
        self
    }
}

impl AssignmentRequest {
    /// Builds a request for a technician from confirmation options.
    pub fn new(
        technician_id: impl Into<String>,
        order_id: Option<String>,
        options: AssignmentOptions,
    ) -> Self {
        Self {
            technician_id: technician_id.into(),
            order_id,
            expected_start_time: options.expected_start_time,
            notes: options.notes,
            notify_technician: options.notify_technician,
        }
    }
}
