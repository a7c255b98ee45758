//! Service orders and the requirement derived from them.
//!
//! A [`ServiceOrder`] is supplied by the order-management system. The engine
//! never scores against it directly: it first derives a normalized
//! [`ServiceRequirement`], which stays immutable for one evaluation pass.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Urgency of a service order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// Wire name of the priority.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

/// A service order as delivered by the order-management system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceOrder {
    /// Order identifier.
    pub id: String,
    /// Service type (e.g., "brake_service").
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    /// Estimated duration in minutes.
    #[serde(default)]
    pub estimated_duration: Option<u32>,
    /// Skills the job needs.
    #[serde(default)]
    pub required_skills: Vec<String>,
}

impl ServiceOrder {
    /// Creates an order with medium priority and nothing else set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Sets the service type.
    pub fn with_service_type(mut self, service_type: impl Into<String>) -> Self {
        self.service_type = Some(service_type.into());
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the estimated duration (minutes).
    pub fn with_estimated_duration(mut self, minutes: u32) -> Self {
        self.estimated_duration = Some(minutes);
        self
    }

    /// Adds a required skill.
    pub fn with_required_skill(mut self, skill: impl Into<String>) -> Self {
        self.required_skills.push(skill.into());
        self
    }
}

/// Normalized scoring criteria for one evaluation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceRequirement {
    /// Service type to match against specializations.
    pub service_type: Option<String>,
    pub priority: Priority,
    /// Estimated duration in minutes.
    pub estimated_duration_minutes: Option<u32>,
    /// Required skills (trimmed, non-empty, deduplicated).
    pub required_skills: BTreeSet<String>,
}

impl ServiceRequirement {
    /// Creates an empty requirement (every technician scores 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the requirement of a service order.
    pub fn from_order(order: &ServiceOrder) -> Self {
        Self::from_sources(Some(order), std::iter::empty::<&str>())
    }

    /// Derives a requirement from an optional order plus explicitly supplied skills.
    ///
    /// Skills from both sources are unioned. Blank skill strings and a blank
    /// service type are dropped.
    pub fn from_sources<I, S>(order: Option<&ServiceOrder>, extra_skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut requirement = Self::new();
        if let Some(order) = order {
            requirement.service_type = order.service_type.as_deref().and_then(normalize);
            requirement.priority = order.priority;
            requirement.estimated_duration_minutes = order.estimated_duration;
            requirement
                .required_skills
                .extend(order.required_skills.iter().filter_map(|s| normalize(s)));
        }
        requirement
            .required_skills
            .extend(extra_skills.into_iter().filter_map(|s| normalize(s.as_ref())));
        requirement
    }

    /// Sets the service type.
    pub fn with_service_type(mut self, service_type: impl AsRef<str>) -> Self {
        self.service_type = normalize(service_type.as_ref());
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Adds a required skill.
    pub fn with_skill(mut self, skill: impl AsRef<str>) -> Self {
        if let Some(skill) = normalize(skill.as_ref()) {
            self.required_skills.insert(skill);
        }
        self
    }

    /// Whether the requirement carries no scoring criteria.
    pub fn is_empty(&self) -> bool {
        self.service_type.is_none() && self.required_skills.is_empty()
    }
}

fn normalize(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
