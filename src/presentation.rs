//! Display labels.
//!
//! Localized text for statuses, priorities, filters, and empty states. The
//! locale is passed here explicitly and never reaches scoring or ranking.

use serde::{Deserialize, Serialize};

use crate::models::{Priority, TechnicianStatus};
use crate::ranking::{CandidateFilter, RankingState};

/// Supported UI languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

/// Text direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Locale {
    pub fn direction(self) -> Direction {
        match self {
            Locale::En => Direction::Ltr,
            Locale::Ar => Direction::Rtl,
        }
    }
}

/// Label of a technician status.
pub fn status_label(status: TechnicianStatus, locale: Locale) -> &'static str {
    match (status, locale) {
        (TechnicianStatus::Available, Locale::En) => "Available",
        (TechnicianStatus::Available, Locale::Ar) => "متاح",
        (TechnicianStatus::Break, Locale::En) => "On Break",
        (TechnicianStatus::Break, Locale::Ar) => "في استراحة",
        (TechnicianStatus::Busy, Locale::En) => "Busy",
        (TechnicianStatus::Busy, Locale::Ar) => "مشغول",
        (TechnicianStatus::Offline, Locale::En) => "Offline",
        (TechnicianStatus::Offline, Locale::Ar) => "غير متصل",
    }
}

/// Label of an order priority.
pub fn priority_label(priority: Priority, locale: Locale) -> &'static str {
    match (priority, locale) {
        (Priority::Low, Locale::En) => "Low",
        (Priority::Low, Locale::Ar) => "منخفضة",
        (Priority::Medium, Locale::En) => "Medium",
        (Priority::Medium, Locale::Ar) => "متوسطة",
        (Priority::High, Locale::En) => "High",
        (Priority::High, Locale::Ar) => "عالية",
        (Priority::Urgent, Locale::En) => "Urgent",
        (Priority::Urgent, Locale::Ar) => "عاجلة",
    }
}

/// Label of a category filter tab.
pub fn filter_label(filter: CandidateFilter, locale: Locale) -> &'static str {
    match (filter, locale) {
        (CandidateFilter::All, Locale::En) => "All",
        (CandidateFilter::All, Locale::Ar) => "الكل",
        (CandidateFilter::Available, Locale::En) => "Available",
        (CandidateFilter::Available, Locale::Ar) => "متاح",
        (CandidateFilter::Busy, Locale::En) => "Busy",
        (CandidateFilter::Busy, Locale::Ar) => "مشغول",
        (CandidateFilter::Recommended, Locale::En) => "Recommended",
        (CandidateFilter::Recommended, Locale::Ar) => "موصى به",
    }
}

/// Guidance shown for empty or partial results. `None` when there is
/// nothing to explain.
pub fn state_message(state: RankingState, locale: Locale) -> Option<&'static str> {
    match (state, locale) {
        (RankingState::NoTechnicians, Locale::En) => Some("No technicians available"),
        (RankingState::NoTechnicians, Locale::Ar) => Some("لا يوجد فنيون متاحون"),
        (RankingState::NoMatches, Locale::En) => Some("No technicians match the current filters"),
        (RankingState::NoMatches, Locale::Ar) => Some("لا يوجد فنيون مطابقون للفلاتر الحالية"),
        (RankingState::NoneRecommended, Locale::En) => {
            Some("No recommended technicians; showing all matches")
        }
        (RankingState::NoneRecommended, Locale::Ar) => {
            Some("لا يوجد فنيون موصى بهم؛ عرض جميع النتائج")
        }
        (RankingState::Ready, _) => None,
    }
}

/// Workload as shown on a technician card, e.g. `"40%"`.
pub fn workload_label(workload_ratio: f64) -> String {
    format!("{}%", (workload_ratio * 100.0).round().clamp(0.0, 100.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction() {
        assert_eq!(Locale::En.direction(), Direction::Ltr);
        assert_eq!(Locale::Ar.direction(), Direction::Rtl);
    }

    #[test]
    fn test_labels() {
        assert_eq!(status_label(TechnicianStatus::Break, Locale::En), "On Break");
        assert_eq!(status_label(TechnicianStatus::Busy, Locale::Ar), "مشغول");
        assert_eq!(priority_label(Priority::Urgent, Locale::En), "Urgent");
        assert_eq!(filter_label(CandidateFilter::Recommended, Locale::En), "Recommended");
    }

    #[test]
    fn test_state_messages_are_distinct() {
        let msgs: Vec<_> = [
            RankingState::NoTechnicians,
            RankingState::NoMatches,
            RankingState::NoneRecommended,
        ]
        .into_iter()
        .map(|s| state_message(s, Locale::En).unwrap())
        .collect();
        assert_ne!(msgs[0], msgs[1]);
        assert_ne!(msgs[1], msgs[2]);
        assert_eq!(state_message(RankingState::Ready, Locale::Ar), None);
    }

    #[test]
    fn test_workload_label() {
        assert_eq!(workload_label(0.4), "40%");
        assert_eq!(workload_label(1.0), "100%");
    }
}
