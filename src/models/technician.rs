//! Technician model.
//!
//! Technicians are the people service orders get assigned to. Each has an
//! availability status, a skill set, a list of service specializations, an
//! optional customer rating, and a job capacity.
//!
//! Records are owned by an external technician directory; this crate only
//! reads snapshots of them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Capacity assumed when a technician has no (or a zero) `max_jobs`.
pub const DEFAULT_MAX_JOBS: i32 = 5;

/// A technician that can be assigned to a service order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technician {
    /// Unique technician identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Localized display name (e.g., Arabic), if the directory has one.
    #[serde(default)]
    pub name_localized: Option<String>,
    /// Role title (e.g., "Senior Mechanic").
    #[serde(default)]
    pub title: String,
    /// Current availability.
    pub status: TechnicianStatus,
    /// Skill tags (e.g., "brakes", "electrical").
    #[serde(default)]
    pub skills: BTreeSet<String>,
    /// Service types this technician specializes in (e.g., "brake_service").
    #[serde(default)]
    pub specializations: BTreeSet<String>,
    /// Customer rating on a 0-5 scale. `None` = not yet rated.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Jobs currently assigned.
    #[serde(default)]
    pub current_jobs: i32,
    /// Maximum concurrent jobs. `None` = [`DEFAULT_MAX_JOBS`].
    #[serde(default)]
    pub max_jobs: Option<i32>,
    /// When the technician is expected to be free next.
    #[serde(default)]
    pub next_available: Option<DateTime<Utc>>,
}

/// Availability status of a technician.
///
/// Declaration order is the availability rank used for ranking ties:
/// more available first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechnicianStatus {
    /// Free to take work.
    Available,
    /// On a break; free again shortly.
    Break,
    /// Working on other jobs.
    Busy,
    /// Not working.
    Offline,
}

impl TechnicianStatus {
    /// Availability rank (0 = most available).
    pub fn availability_rank(self) -> u8 {
        match self {
            TechnicianStatus::Available => 0,
            TechnicianStatus::Break => 1,
            TechnicianStatus::Busy => 2,
            TechnicianStatus::Offline => 3,
        }
    }

    /// Wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            TechnicianStatus::Available => "available",
            TechnicianStatus::Break => "break",
            TechnicianStatus::Busy => "busy",
            TechnicianStatus::Offline => "offline",
        }
    }
}

impl std::fmt::Display for TechnicianStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Technician {
    /// Creates an available technician with no skills and default capacity.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_localized: None,
            title: String::new(),
            status: TechnicianStatus::Available,
            skills: BTreeSet::new(),
            specializations: BTreeSet::new(),
            rating: None,
            current_jobs: 0,
            max_jobs: None,
            next_available: None,
        }
    }

    /// Sets the localized display name.
    pub fn with_localized_name(mut self, name: impl Into<String>) -> Self {
        self.name_localized = Some(name.into());
        self
    }

    /// Sets the role title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the availability status.
    pub fn with_status(mut self, status: TechnicianStatus) -> Self {
        self.status = status;
        self
    }

    /// Adds a skill.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.insert(skill.into());
        self
    }

    /// Adds several skills.
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills.extend(skills.into_iter().map(Into::into));
        self
    }

    /// Adds a specialization.
    pub fn with_specialization(mut self, service_type: impl Into<String>) -> Self {
        self.specializations.insert(service_type.into());
        self
    }

    /// Sets the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Sets current and maximum job counts.
    pub fn with_jobs(mut self, current_jobs: i32, max_jobs: i32) -> Self {
        self.current_jobs = current_jobs;
        self.max_jobs = Some(max_jobs);
        self
    }

    /// Sets the next-available timestamp.
    pub fn with_next_available(mut self, at: DateTime<Utc>) -> Self {
        self.next_available = Some(at);
        self
    }

    /// Whether this technician lists a given skill.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.contains(skill)
    }

    /// Whether this technician specializes in a given service type.
    pub fn specializes_in(&self, service_type: &str) -> bool {
        self.specializations.contains(service_type)
    }

    /// Whether the technician is currently available.
    pub fn is_available(&self) -> bool {
        self.status == TechnicianStatus::Available
    }

    /// Effective capacity: `max_jobs` if positive, otherwise `default_max_jobs`.
    pub fn effective_max_jobs(&self, default_max_jobs: i32) -> i32 {
        match self.max_jobs {
            Some(max) if max > 0 => max,
            _ => default_max_jobs.max(1),
        }
    }

    /// Case-insensitive substring search over names, title, and skills.
    ///
    /// `needle` must already be lowercase. An empty needle matches everything.
    pub fn matches_text(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let hit = |s: &str| s.to_lowercase().contains(needle);
        hit(self.name.as_str())
            || self.name_localized.as_deref().is_some_and(hit)
            || hit(self.title.as_str())
            || self.skills.iter().any(|s| hit(s.as_str()))
    }
}
