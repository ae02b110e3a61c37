//! Plain-value request shapes for collaborating transport layers.
//!
//! Callers hand these to the pipeline as deserialized values and persist
//! or return the results unchanged; no transport or storage concerns
//! live here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::recipe_parser::parse_text_recipe;
use crate::scaler::scale_recipe;
use crate::scheduler::build_schedule;
use crate::types::{CapacityProfile, Recipe, Schedule};

/// Parse raw recipe text, optionally rescaling to a different headcount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseRecipeRequest {
    pub title: Option<String>,
    /// The yield the text's quantities are written for.
    pub base_headcount: u32,
    /// When present and different from `base_headcount`, the parsed
    /// recipe is scaled before being returned.
    pub target_headcount: Option<u32>,
    pub raw_text: String,
}

/// Build a schedule for a set of recipes ending at a serve time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildScheduleRequest {
    pub recipes: Vec<Recipe>,
    pub serve_time: DateTime<Utc>,
    pub capacity_profile: Option<CapacityProfile>,
}

/// Run the parse (and optional scale) pipeline for a request.
pub fn parse_recipe_request(req: &ParseRecipeRequest) -> Recipe {
    let recipe = parse_text_recipe(req.title.as_deref(), req.base_headcount, &req.raw_text);
    match req.target_headcount {
        Some(target) if target != req.base_headcount => scale_recipe(&recipe, target),
        _ => recipe,
    }
}

/// Run the schedule-building pipeline for a request.
pub fn build_schedule_request(req: &BuildScheduleRequest) -> Schedule {
    build_schedule(&req.recipes, req.serve_time, req.capacity_profile.as_ref())
}
