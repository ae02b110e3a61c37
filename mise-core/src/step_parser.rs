//! Direction line parsing.
//!
//! Turns free-text recipe steps into [`AtomicTask`] values with a station
//! assignment and an estimated duration.

use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

use crate::types::{AtomicTask, Station};

/// Leading "3. " / "2) " style prefixes.
static STEP_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.)]\s*").expect("Invalid step prefix regex"));

static MINUTES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(?:min|minute|minutes)").expect("Invalid minutes regex"));

static HOURS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(?:hr|hour|hours)").expect("Invalid hours regex"));

static SECONDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(?:sec|second|seconds)").expect("Invalid seconds regex"));

const OVEN_WORDS: &[&str] = &["bake", "roast", "broil"];
const STOVE_WORDS: &[&str] = &[
    "sauté", "simmer", "boil", "fry", "cook", "heat", "stir", "reduce",
];
const PREP_WORDS: &[&str] = &[
    "chop", "dice", "slice", "cut", "mince", "grate", "peel", "mix", "combine", "whisk", "beat",
];
const PASSIVE_WORDS: &[&str] = &["rest", "chill", "marinate", "soak", "let stand"];

/// Station keyword rules, evaluated first-match-wins. Membership is a
/// substring test against the lowercased step text.
const STATION_RULES: &[(&[&str], Station)] = &[
    (OVEN_WORDS, Station::Oven),
    (STOVE_WORDS, Station::Stove),
    (PREP_WORDS, Station::Prep),
    (PASSIVE_WORDS, Station::Passive),
];

/// Default duration when a step mentions no time.
const DEFAULT_DURATION_MINUTES: u32 = 5;

/// Steps shorter than this (after prefix stripping) are treated as noise.
const MIN_STEP_CHARS: usize = 5;

/// Classify a step into a station by keyword membership.
/// Falls back to `counter` (assembly, plating, etc.) when nothing matches.
pub fn classify_station(step: &str) -> Station {
    let lower = step.to_lowercase();
    for (words, station) in STATION_RULES {
        if words.iter().any(|w| lower.contains(w)) {
            return *station;
        }
    }
    Station::Counter
}

/// Estimate a step's duration in minutes from explicit time mentions.
///
/// Minutes are checked before hours before seconds; the first pattern
/// that matches anywhere in the text wins. Seconds round down to whole
/// minutes with a minimum of 1.
pub fn estimate_duration(step: &str) -> u32 {
    let lower = step.to_lowercase();

    if let Some(caps) = MINUTES_RE.captures(&lower) {
        if let Ok(n) = caps[1].parse::<u32>() {
            return n;
        }
    }
    if let Some(caps) = HOURS_RE.captures(&lower) {
        if let Ok(n) = caps[1].parse::<u32>() {
            return n.saturating_mul(60);
        }
    }
    if let Some(caps) = SECONDS_RE.captures(&lower) {
        if let Ok(n) = caps[1].parse::<u32>() {
            return (n / 60).max(1);
        }
    }

    DEFAULT_DURATION_MINUTES
}

/// Raise an estimate to the station's floor. Oven and stove work rarely
/// finishes as fast as the text implies; counter and passive stations
/// have no floor.
fn apply_station_floor(station: Station, duration: u32) -> u32 {
    match station {
        Station::Oven if duration < 10 => 15,
        Station::Stove if duration < 5 => 8,
        Station::Prep if duration < 3 => 5,
        _ => duration,
    }
}

/// Parse one direction line into a task.
///
/// Returns `None` for noise lines (shorter than 5 characters after the
/// numeric prefix is stripped).
pub fn parse_step(line: &str) -> Option<AtomicTask> {
    let line = STEP_PREFIX_RE.replace(line, "");
    if line.chars().count() < MIN_STEP_CHARS {
        return None;
    }

    let station = classify_station(&line);
    let duration = apply_station_floor(station, estimate_duration(&line));

    Some(AtomicTask {
        id: Uuid::new_v4().to_string(),
        label: line.to_string(),
        // A zero-minute task can't be placed on a timeline.
        duration_minutes: duration.max(1),
        station,
        depends_on: Vec::new(),
        notes: None,
    })
}

/// Parse a directions text block, one task per surviving line, in order.
pub fn parse_steps(text: &str) -> Vec<AtomicTask> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_step)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_classification() {
        assert_eq!(classify_station("Bake for 20 minutes"), Station::Oven);
        assert_eq!(classify_station("Simmer the sauce"), Station::Stove);
        assert_eq!(classify_station("Dice the onions"), Station::Prep);
        assert_eq!(classify_station("Let stand 10 minutes"), Station::Passive);
        assert_eq!(classify_station("Plate and serve"), Station::Counter);
    }

    #[test]
    fn test_oven_wins_over_stove() {
        // "Roast, then stir halfway" mentions both; oven words are
        // checked first.
        assert_eq!(
            classify_station("Roast, then stir halfway through"),
            Station::Oven
        );
    }

    #[test]
    fn test_duration_minutes() {
        assert_eq!(estimate_duration("bake for 20 minutes"), 20);
        assert_eq!(estimate_duration("simmer 45 min"), 45);
    }

    #[test]
    fn test_duration_hours() {
        assert_eq!(estimate_duration("marinate for 2 hours"), 120);
        assert_eq!(estimate_duration("chill 1 hr"), 60);
    }

    #[test]
    fn test_duration_seconds_floor_to_one() {
        assert_eq!(estimate_duration("blanch for 30 seconds"), 1);
        assert_eq!(estimate_duration("microwave 90 seconds"), 1);
        assert_eq!(estimate_duration("rest 120 seconds"), 2);
    }

    #[test]
    fn test_minutes_checked_before_hours() {
        assert_eq!(estimate_duration("cook 1 hour 30 minutes"), 30);
    }

    #[test]
    fn test_default_duration() {
        assert_eq!(estimate_duration("season to taste"), 5);
    }

    #[test]
    fn test_station_floors() {
        // "bake 5 minutes" is below the oven floor.
        let task = parse_step("Bake for 5 minutes").unwrap();
        assert_eq!(task.duration_minutes, 15);

        let task = parse_step("Stir for 2 minutes").unwrap();
        assert_eq!(task.station, Station::Stove);
        assert_eq!(task.duration_minutes, 8);

        let task = parse_step("Chop the garlic for 1 minute").unwrap();
        assert_eq!(task.station, Station::Prep);
        assert_eq!(task.duration_minutes, 5);

        // Counter has no floor.
        let task = parse_step("Garnish, takes 1 minute or so").unwrap();
        assert_eq!(task.station, Station::Counter);
        assert_eq!(task.duration_minutes, 1);
    }

    #[test]
    fn test_numeric_prefix_stripped() {
        let task = parse_step("3. Whisk the eggs").unwrap();
        assert_eq!(task.label, "Whisk the eggs");
        assert_eq!(task.station, Station::Prep);

        let task = parse_step("2) Bake until golden").unwrap();
        assert_eq!(task.label, "Bake until golden");
    }

    #[test]
    fn test_short_lines_discarded() {
        assert!(parse_step("Mix").is_none());
        assert!(parse_step("1. ok").is_none());
    }

    #[test]
    fn test_parse_steps_in_order() {
        let text = "1. Dice the onions\n2. Simmer for 10 minutes\n3. Bake for 20 minutes";
        let tasks = parse_steps(text);
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].station, Station::Prep);
        assert_eq!(tasks[1].station, Station::Stove);
        assert_eq!(tasks[2].station, Station::Oven);
        assert!(tasks.iter().all(|t| t.depends_on.is_empty()));
    }

    #[test]
    fn test_ids_are_unique() {
        let tasks = parse_steps("Dice the onions\nDice the onions");
        assert_eq!(tasks.len(), 2);
        assert_ne!(tasks[0].id, tasks[1].id);
    }
}
