use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kitchen stations a task can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Station {
    Prep,
    Oven,
    Stove,
    Counter,
    Passive,
}

impl Station {
    /// All stations, in wire-vocabulary order.
    pub const ALL: &'static [Station] = &[
        Station::Prep,
        Station::Oven,
        Station::Stove,
        Station::Counter,
        Station::Passive,
    ];

    /// Scheduling priority rank. Lower ranks are placed closer to serve
    /// time; higher ranks are pushed earlier in the day.
    pub fn priority(&self) -> u8 {
        match self {
            Station::Oven => 1,
            Station::Stove => 2,
            Station::Counter => 3,
            Station::Prep => 4,
            Station::Passive => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Station::Prep => "prep",
            Station::Oven => "oven",
            Station::Stove => "stove",
            Station::Counter => "counter",
            Station::Passive => "passive",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "prep" => Some(Station::Prep),
            "oven" => Some(Station::Oven),
            "stove" => Some(Station::Stove),
            "counter" => Some(Station::Counter),
            "passive" => Some(Station::Passive),
            _ => None,
        }
    }
}

/// Warning codes produced by capacity analysis. Wire values are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Warning {
    OvenOverbooked,
    AllOvenNoPrep,
    PrepWindowTooShort,
    CapacityOverload,
    TooManyProjects,
}

impl Warning {
    pub fn as_str(&self) -> &'static str {
        match self {
            Warning::OvenOverbooked => "oven_overbooked",
            Warning::AllOvenNoPrep => "all_oven_no_prep",
            Warning::PrepWindowTooShort => "prep_window_too_short",
            Warning::CapacityOverload => "capacity_overload",
            Warning::TooManyProjects => "too_many_projects",
        }
    }
}

/// A single ingredient with whatever quantity information parsing recovered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Numeric quantity if known (fractions are converted to decimals).
    pub quantity: Option<f64>,
    /// Lowercased unit, e.g. "cup", "g".
    pub unit: Option<String>,
    /// Preparation notes, e.g. "finely diced", "softened".
    pub notes: Option<String>,
    /// Reserved for unit normalization; scaled alongside `quantity`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_grams: Option<f64>,
}

/// A single atomic cooking task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomicTask {
    pub id: String,
    /// e.g. "Dice onions"
    pub label: String,
    pub duration_minutes: u32,
    pub station: Station,
    /// Ids of tasks this one depends on. Carried through the pipeline but
    /// not consulted by the scheduler (known limitation).
    #[serde(default)]
    pub depends_on: Vec<String>,
    pub notes: Option<String>,
}

/// A complete recipe with ingredients and tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    /// The yield the ingredient quantities are written for.
    pub headcount: u32,
    pub ingredients: Vec<Ingredient>,
    pub tasks: Vec<AtomicTask>,
    /// Provenance: "manual", a URL, etc.
    pub source: Option<String>,
}

/// A task pinned to concrete start and end times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub id: String,
    pub label: String,
    pub station: Station,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub notes: Option<String>,
}

/// The tasks assigned to one station, ordered by start time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleLane {
    pub station: Station,
    pub tasks: Vec<ScheduledTask>,
}

/// A complete cooking schedule. Lanes appear in station priority order,
/// not alphabetically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub serve_time: DateTime<Utc>,
    pub lanes: Vec<ScheduleLane>,
    pub notes: Option<String>,
    #[serde(default)]
    pub warnings: Vec<Warning>,
}

/// Kitchen capacity limits supplied by collaborators from stored user
/// preferences. `oven_capacity_lbs` is carried for them but not consulted
/// by the current warning rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapacityProfile {
    pub oven_capacity_lbs: Option<f64>,
    pub burner_count: Option<u32>,
}
