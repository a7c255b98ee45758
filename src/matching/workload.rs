//! Workload calculation.
//!
//! Converts a technician's job counts into a load ratio used by the
//! recommendation gate and shown as a percentage in the UI.

use crate::models::Technician;

/// Load ratio of `current_jobs / max_jobs`, rounded to two decimals.
///
/// Negative job counts clamp to 0 and a non-positive `max_jobs` falls back to
/// `default_max_jobs`, so the result is always in `[0, 1]`.
pub fn workload_ratio(current_jobs: i32, max_jobs: Option<i32>, default_max_jobs: i32) -> f64 {
    f64::from(workload_percent(current_jobs, max_jobs, default_max_jobs)) / 100.0
}

/// Load as a whole percentage in `0..=100`.
pub fn workload_percent(current_jobs: i32, max_jobs: Option<i32>, default_max_jobs: i32) -> u8 {
    let current = current_jobs.max(0);
    let max = match max_jobs {
        Some(max) if max > 0 => max,
        _ => default_max_jobs.max(1),
    };
    let percent = (f64::from(current) / f64::from(max) * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

/// Workload ratio of a technician.
pub fn technician_workload(technician: &Technician, default_max_jobs: i32) -> f64 {
    workload_ratio(technician.current_jobs, technician.max_jobs, default_max_jobs)
}
