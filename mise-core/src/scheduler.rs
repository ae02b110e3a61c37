//! Backward schedule construction.
//!
//! Lays every task from a set of recipes onto a timeline ending at the
//! serve time. Placement is a greedy two-phase backward walk: oven and
//! stove lanes are packed against the serve time, everything else is
//! packed against the earliest moment a high-priority station is needed.
//! Task dependencies are not consulted (known limitation), and
//! cross-station capacity is checked afterwards by [`crate::capacity`].

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::capacity::analyze_capacity;
use crate::types::{
    AtomicTask, CapacityProfile, Recipe, Schedule, ScheduleLane, ScheduledTask, Station,
};

/// Stations with priority rank at or below this are packed directly
/// against the serve time.
const HIGH_PRIORITY_RANK: u8 = 2;

/// How far before serve time low-priority work starts when there is no
/// oven or stove work to anchor it.
const DEFAULT_LEAD_HOURS: i64 = 2;

/// Build a backwards-planned cooking schedule from recipes and a serve
/// time.
///
/// Zero tasks is a valid terminal case: the result has no lanes and an
/// explanatory note. Otherwise lanes appear in station priority order,
/// each with its tasks sorted by start time, and `warnings` holds the
/// capacity analysis of the finished layout.
pub fn build_schedule(
    recipes: &[Recipe],
    serve_time: DateTime<Utc>,
    profile: Option<&CapacityProfile>,
) -> Schedule {
    let all_tasks: Vec<&AtomicTask> = recipes.iter().flat_map(|r| r.tasks.iter()).collect();

    if all_tasks.is_empty() {
        return Schedule {
            serve_time,
            lanes: Vec::new(),
            notes: Some("No tasks to schedule".to_string()),
            warnings: Vec::new(),
        };
    }

    let mut tasks_by_station: HashMap<Station, Vec<&AtomicTask>> = HashMap::new();
    for &task in &all_tasks {
        tasks_by_station.entry(task.station).or_default().push(task);
    }

    let mut stations: Vec<Station> = tasks_by_station.keys().copied().collect();
    stations.sort_by_key(Station::priority);

    // Measuring pass: walk the high-priority stations backward from the
    // serve time to find the earliest moment one of them starts.
    let earliest_high_priority = stations
        .iter()
        .filter(|s| s.priority() <= HIGH_PRIORITY_RANK)
        .filter_map(|s| tasks_by_station.get(s))
        .map(|tasks| place_backward(tasks, serve_time).1)
        .min()
        .unwrap_or_else(|| serve_time - Duration::hours(DEFAULT_LEAD_HOURS));

    // Placement pass: high-priority lanes pack against the serve time,
    // the rest pack against the point found above.
    let lanes: Vec<ScheduleLane> = stations
        .iter()
        .map(|&station| {
            let cursor = if station.priority() <= HIGH_PRIORITY_RANK {
                serve_time
            } else {
                earliest_high_priority
            };
            let (mut placed, _) = place_backward(&tasks_by_station[&station], cursor);
            placed.sort_by_key(|t| t.start_time);
            ScheduleLane {
                station,
                tasks: placed,
            }
        })
        .collect();

    tracing::debug!(
        "Scheduled {} tasks across {} stations for {}",
        all_tasks.len(),
        lanes.len(),
        serve_time
    );

    let warnings = analyze_capacity(&lanes, serve_time, profile);

    Schedule {
        serve_time,
        notes: Some(format!(
            "Scheduled {} tasks across {} stations",
            all_tasks.len(),
            lanes.len()
        )),
        lanes,
        warnings,
    }
}

/// Place tasks back-to-back working backward from `cursor`.
///
/// Each task ends where the previous one started: the first listed task
/// ends at `cursor` itself. Returns the placed tasks in input order and
/// the earliest start time reached (`cursor` when there are no tasks).
fn place_backward(
    tasks: &[&AtomicTask],
    cursor: DateTime<Utc>,
) -> (Vec<ScheduledTask>, DateTime<Utc>) {
    let mut placed = Vec::with_capacity(tasks.len());
    let mut cursor = cursor;

    for task in tasks {
        let end_time = cursor;
        let start_time = end_time - Duration::minutes(i64::from(task.duration_minutes));
        placed.push(ScheduledTask {
            id: task.id.clone(),
            label: task.label.clone(),
            station: task.station,
            start_time,
            end_time,
            notes: task.notes.clone(),
        });
        cursor = start_time;
    }

    (placed, cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn task(id: &str, station: Station, minutes: u32) -> AtomicTask {
        AtomicTask {
            id: id.to_string(),
            label: format!("task {id}"),
            duration_minutes: minutes,
            station,
            depends_on: Vec::new(),
            notes: None,
        }
    }

    fn recipe(tasks: Vec<AtomicTask>) -> Recipe {
        Recipe {
            id: "r1".to_string(),
            title: "Test".to_string(),
            headcount: 4,
            ingredients: vec![],
            tasks,
            source: None,
        }
    }

    fn serve() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 12, 18, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_input_yields_no_lanes() {
        let schedule = build_schedule(&[], serve(), None);
        assert!(schedule.lanes.is_empty());
        assert_eq!(schedule.notes.as_deref(), Some("No tasks to schedule"));
    }

    #[test]
    fn test_recipe_with_no_tasks_yields_no_lanes() {
        let schedule = build_schedule(&[recipe(vec![])], serve(), None);
        assert!(schedule.lanes.is_empty());
        assert!(schedule.notes.is_some());
    }

    #[test]
    fn test_oven_tasks_pack_back_to_back_against_serve_time() {
        let r = recipe(vec![
            task("a", Station::Oven, 30),
            task("b", Station::Oven, 20),
        ]);
        let schedule = build_schedule(&[r], serve(), None);
        assert_eq!(schedule.lanes.len(), 1);

        let lane = &schedule.lanes[0];
        assert_eq!(lane.station, Station::Oven);
        // Lane tasks are sorted by start time, so "b" (placed first,
        // ending at serve time) comes second.
        assert_eq!(lane.tasks[1].id, "a");
        assert_eq!(lane.tasks[1].end_time, serve());
        assert_eq!(lane.tasks[1].start_time, serve() - Duration::minutes(30));
        assert_eq!(lane.tasks[0].id, "b");
        assert_eq!(lane.tasks[0].end_time, lane.tasks[1].start_time);
        assert_eq!(
            lane.tasks[0].start_time,
            serve() - Duration::minutes(50)
        );
    }

    #[test]
    fn test_lanes_in_priority_order() {
        let r = recipe(vec![
            task("p", Station::Prep, 10),
            task("c", Station::Counter, 10),
            task("o", Station::Oven, 30),
            task("s", Station::Stove, 15),
        ]);
        let schedule = build_schedule(&[r], serve(), None);
        let order: Vec<Station> = schedule.lanes.iter().map(|l| l.station).collect();
        assert_eq!(
            order,
            vec![Station::Oven, Station::Stove, Station::Counter, Station::Prep]
        );
    }

    #[test]
    fn test_low_priority_packs_before_earliest_high_priority() {
        let r = recipe(vec![
            task("o", Station::Oven, 30),
            task("s", Station::Stove, 45),
            task("p", Station::Prep, 10),
        ]);
        let schedule = build_schedule(&[r], serve(), None);
        // The stove lane reaches further back than the oven lane.
        let earliest_high = serve() - Duration::minutes(45);
        let prep = schedule
            .lanes
            .iter()
            .find(|l| l.station == Station::Prep)
            .unwrap();
        assert_eq!(prep.tasks[0].end_time, earliest_high);
        assert_eq!(prep.tasks[0].start_time, earliest_high - Duration::minutes(10));
    }

    #[test]
    fn test_default_anchor_without_high_priority_stations() {
        let r = recipe(vec![task("p", Station::Prep, 20)]);
        let schedule = build_schedule(&[r], serve(), None);
        let prep = &schedule.lanes[0];
        assert_eq!(prep.tasks[0].end_time, serve() - Duration::hours(2));
    }

    #[test]
    fn test_tasks_pool_across_recipes() {
        let r1 = recipe(vec![task("a", Station::Oven, 30)]);
        let r2 = recipe(vec![task("b", Station::Oven, 20)]);
        let schedule = build_schedule(&[r1, r2], serve(), None);
        assert_eq!(schedule.lanes[0].tasks.len(), 2);
        assert_eq!(
            schedule.notes.as_deref(),
            Some("Scheduled 2 tasks across 1 stations")
        );
    }

    #[test]
    fn test_every_task_starts_before_it_ends() {
        let r = recipe(vec![
            task("a", Station::Oven, 30),
            task("b", Station::Stove, 5),
            task("c", Station::Prep, 10),
            task("d", Station::Passive, 60),
            task("e", Station::Counter, 1),
        ]);
        let schedule = build_schedule(&[r], serve(), None);
        for lane in &schedule.lanes {
            for t in &lane.tasks {
                assert!(t.start_time < t.end_time);
            }
        }
    }

    #[test]
    fn test_no_overlap_within_a_lane() {
        let r = recipe(vec![
            task("a", Station::Stove, 12),
            task("b", Station::Stove, 7),
            task("c", Station::Stove, 25),
        ]);
        let schedule = build_schedule(&[r], serve(), None);
        let lane = &schedule.lanes[0];
        for pair in lane.tasks.windows(2) {
            assert!(pair[0].end_time <= pair[1].start_time);
        }
    }

    #[test]
    fn test_active_lanes_end_at_or_before_serve_time() {
        let r = recipe(vec![
            task("a", Station::Oven, 30),
            task("b", Station::Prep, 10),
        ]);
        let schedule = build_schedule(&[r], serve(), None);
        for lane in &schedule.lanes {
            for t in &lane.tasks {
                assert!(t.end_time <= serve());
            }
        }
    }
}
