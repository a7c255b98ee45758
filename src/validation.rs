//! Input validation for technician pools.
//!
//! The engine itself never fails on odd data: it clamps and skips. This
//! module lets a host find out what it clamped. Detects:
//! - Duplicate or blank technician IDs
//! - Ratings outside the 0-5 scale
//! - Negative job counts
//! - Technicians over capacity
//! - Blank skill or specialization tags

use std::collections::HashSet;

use crate::matching::MAX_RATING;
use crate::models::Technician;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending technician ID (may be blank).
    pub technician_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two technicians share the same ID.
    DuplicateId,
    /// A technician has a blank ID.
    EmptyId,
    /// Rating is not a number in `[0, 5]`.
    RatingOutOfRange,
    /// `current_jobs` or `max_jobs` is negative.
    NegativeJobCount,
    /// More current jobs than capacity.
    OverCapacity,
    /// A skill or specialization is blank.
    BlankTag,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, technician_id: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            technician_id: technician_id.to_string(),
            message: message.into(),
        }
    }
}

/// Validates a technician pool.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_technicians(technicians: &[Technician], default_max_jobs: i32) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for t in technicians {
        let id = t.id.as_str();

        if id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                id,
                format!("Technician '{}' has a blank ID", t.name),
            ));
        } else if !ids.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                id,
                format!("Duplicate technician ID: {id}"),
            ));
        }

        if let Some(rating) = t.rating {
            if !(0.0..=MAX_RATING).contains(&rating) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::RatingOutOfRange,
                    id,
                    format!("Technician '{id}' has rating {rating} outside [0, {MAX_RATING}]"),
                ));
            }
        }

        if t.current_jobs < 0 || t.max_jobs.is_some_and(|m| m < 0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeJobCount,
                id,
                format!(
                    "Technician '{id}' has negative job counts ({} / {:?})",
                    t.current_jobs, t.max_jobs
                ),
            ));
        } else {
            let max = t.effective_max_jobs(default_max_jobs);
            if t.current_jobs > max {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OverCapacity,
                    id,
                    format!(
                        "Technician '{id}' has {} jobs but capacity {max}",
                        t.current_jobs
                    ),
                ));
            }
        }

        let blank = t
            .skills
            .iter()
            .chain(t.specializations.iter())
            .any(|tag| tag.trim().is_empty());
        if blank {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankTag,
                id,
                format!("Technician '{id}' has a blank skill or specialization"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
