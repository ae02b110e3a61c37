//! Recipe scaling.
//!
//! Scales ingredient quantities to a new headcount. Task durations are
//! not scaled with headcount in this version.

use crate::types::{Ingredient, Recipe};

/// Scale a recipe's ingredients to a target headcount.
///
/// Returns a new recipe with `headcount` set to the target and every
/// present `quantity`/`normalized_grams` multiplied by
/// `target / recipe.headcount`. A recipe whose own headcount is zero
/// scales with factor 1.0 rather than failing.
pub fn scale_recipe(recipe: &Recipe, target_headcount: u32) -> Recipe {
    let factor = if recipe.headcount == 0 {
        1.0
    } else {
        f64::from(target_headcount) / f64::from(recipe.headcount)
    };

    let ingredients = recipe
        .ingredients
        .iter()
        .map(|ing| Ingredient {
            quantity: ing.quantity.map(|q| q * factor),
            normalized_grams: ing.normalized_grams.map(|g| g * factor),
            ..ing.clone()
        })
        .collect();

    Recipe {
        headcount: target_headcount,
        ingredients,
        ..recipe.clone()
    }
}
