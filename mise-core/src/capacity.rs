//! Post-hoc capacity analysis of a built schedule.
//!
//! The scheduler guarantees no overlap within a lane it built itself,
//! but hand-authored lanes and cross-station limits (one oven, a fixed
//! number of burners) are only checked here. Each rule is independent;
//! all are evaluated and the resulting codes de-duplicated.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};

use crate::types::{CapacityProfile, ScheduleLane, ScheduledTask, Station, Warning};

/// Oven work starting closer to serve time than this, with no prep lane
/// at all, suggests the plan is missing its setup work.
const MIN_OVEN_LEAD_MINUTES: i64 = 30;

/// Fraction of the prep window that prep work may fill before it is
/// flagged as too tight.
const PREP_WINDOW_FILL_LIMIT: f64 = 0.9;

/// Total task count above which the plan is flagged as overambitious.
const MAX_TOTAL_TASKS: usize = 20;

/// Analyze a schedule's lanes for capacity problems.
///
/// Returns de-duplicated warning codes; order is not guaranteed.
pub fn analyze_capacity(
    lanes: &[ScheduleLane],
    serve_time: DateTime<Utc>,
    profile: Option<&CapacityProfile>,
) -> Vec<Warning> {
    let mut warnings = BTreeSet::new();

    let oven_tasks = lane_tasks_by_start(lanes, Station::Oven);
    let prep_tasks = lane_tasks_by_start(lanes, Station::Prep);

    // A single oven can't run two dishes at once.
    if oven_tasks.len() >= 2 && overlapping_pairs(&oven_tasks) > 0 {
        warnings.insert(Warning::OvenOverbooked);
    }

    // All-oven plans with no prep lane and oven work starting right
    // before serve time.
    if let Some(first_oven) = oven_tasks.first() {
        if prep_tasks.is_empty()
            && serve_time - first_oven.start_time < Duration::minutes(MIN_OVEN_LEAD_MINUTES)
        {
            warnings.insert(Warning::AllOvenNoPrep);
        }
    }

    // Prep work filling more than 90% of its wall-clock window.
    if let Some(earliest_prep) = prep_tasks.first() {
        let total_prep: f64 = prep_tasks
            .iter()
            .map(|t| minutes_between(t.start_time, t.end_time))
            .sum();
        let window = minutes_between(earliest_prep.start_time, serve_time);
        if total_prep > window * PREP_WINDOW_FILL_LIMIT {
            warnings.insert(Warning::PrepWindowTooShort);
        }
    }

    // More simultaneous stove work than there are burners.
    if let Some(burner_count) = profile.and_then(|p| p.burner_count).filter(|&b| b > 0) {
        let stove_tasks = lane_tasks_by_start(lanes, Station::Stove);
        if stove_tasks.len() > burner_count as usize
            && overlapping_pairs(&stove_tasks) >= burner_count as usize
        {
            warnings.insert(Warning::CapacityOverload);
        }
    }

    let total_tasks: usize = lanes.iter().map(|l| l.tasks.len()).sum();
    if total_tasks > MAX_TOTAL_TASKS {
        warnings.insert(Warning::TooManyProjects);
    }

    warnings.into_iter().collect()
}

/// A station's tasks sorted by start time; empty when the lane is absent.
fn lane_tasks_by_start(lanes: &[ScheduleLane], station: Station) -> Vec<ScheduledTask> {
    let mut tasks: Vec<ScheduledTask> = lanes
        .iter()
        .find(|lane| lane.station == station)
        .map(|lane| lane.tasks.clone())
        .unwrap_or_default();
    tasks.sort_by_key(|t| t.start_time);
    tasks
}

/// Count adjacent pairs (by start time) that overlap in time.
fn overlapping_pairs(tasks: &[ScheduledTask]) -> usize {
    tasks
        .windows(2)
        .filter(|pair| pair[0].end_time > pair[1].start_time)
        .count()
}

fn minutes_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_seconds() as f64 / 60.0
}
