//! Free-text recipe parsing.
//!
//! Splits raw recipe text into ingredient and direction sections, then
//! delegates line parsing to [`crate::ingredient_parser`] and
//! [`crate::step_parser`]. Parsing never fails for well-formed string
//! input; degenerate text yields a recipe with empty lists.

use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

use crate::ingredient_parser::parse_ingredients;
use crate::step_parser::parse_steps;
use crate::types::Recipe;

const UNTITLED: &str = "Untitled Recipe";

/// "Ingredients"-style section heading, on its own line with an optional
/// trailing colon.
static INGREDIENTS_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|\n)\s*(?:ingredients?|ingredient list)\s*(?::|\n)")
        .expect("Invalid ingredients heading regex")
});

/// "Directions"/"Steps"/"Instructions"/"Method" section heading.
static DIRECTIONS_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|\n)\s*(?:directions?|steps?|instructions?|method)\s*(?::|\n)")
        .expect("Invalid directions heading regex")
});

/// Parse a raw text recipe into a structured [`Recipe`].
///
/// If `title` is absent, the first non-blank line of the text is used
/// unless it reads like a section heading, in which case a placeholder
/// title is substituted.
pub fn parse_text_recipe(title: Option<&str>, headcount: u32, raw_text: &str) -> Recipe {
    let title = resolve_title(title, raw_text);
    let (ingredients_text, steps_text) = split_sections(raw_text);

    let ingredients = parse_ingredients(&ingredients_text);
    let tasks = parse_steps(&steps_text);

    tracing::debug!(
        "Parsed {:?}: {} ingredients, {} tasks",
        title,
        ingredients.len(),
        tasks.len()
    );

    Recipe {
        id: Uuid::new_v4().to_string(),
        title,
        headcount,
        ingredients,
        tasks,
        source: Some("manual".to_string()),
    }
}

fn resolve_title(title: Option<&str>, raw_text: &str) -> String {
    if let Some(t) = title {
        if !t.trim().is_empty() {
            return t.to_string();
        }
    }

    let first_line = raw_text.lines().map(str::trim).find(|l| !l.is_empty());
    match first_line {
        Some(line) => {
            let lower = line.to_lowercase();
            if lower.starts_with("ingredients")
                || lower.starts_with("directions")
                || lower.starts_with("steps")
            {
                UNTITLED.to_string()
            } else {
                line.to_string()
            }
        }
        None => UNTITLED.to_string(),
    }
}

/// Locate the ingredient and direction sections.
///
/// Both headings found: ingredients are strictly between them, steps are
/// everything after the directions heading. Only one heading found: it
/// splits the text at that point. Neither: split the text in half by
/// line count (lossy fallback; the first half is treated as
/// ingredients).
fn split_sections(raw_text: &str) -> (String, String) {
    let ingredients_match = INGREDIENTS_HEADING_RE.find(raw_text);
    let directions_match = DIRECTIONS_HEADING_RE.find(raw_text);

    match (ingredients_match, directions_match) {
        (Some(ing), Some(dir)) => {
            // A directions heading that precedes the ingredients heading
            // leaves the ingredients section empty.
            let ingredients = raw_text.get(ing.end()..dir.start()).unwrap_or("");
            let steps = &raw_text[dir.end()..];
            (ingredients.to_string(), steps.to_string())
        }
        (Some(ing), None) => (raw_text[ing.end()..].to_string(), String::new()),
        (None, Some(dir)) => (
            raw_text[..dir.start()].to_string(),
            raw_text[dir.end()..].to_string(),
        ),
        (None, None) => {
            let lines: Vec<&str> = raw_text.split('\n').collect();
            let mid = lines.len() / 2;
            (lines[..mid].join("\n"), lines[mid..].join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Station;

    const CLASSIC: &str = "\
Roast Chicken

Ingredients:
2 cups flour
1/2 tsp salt

Directions:
1. Whisk the flour and salt
2. Bake for 20 minutes";

    #[test]
    fn test_sections_split_on_headings() {
        let recipe = parse_text_recipe(None, 4, CLASSIC);
        assert_eq!(recipe.title, "Roast Chicken");
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.tasks.len(), 2);
        assert_eq!(recipe.source.as_deref(), Some("manual"));
        assert_eq!(recipe.headcount, 4);
    }

    #[test]
    fn test_directions_heading_only() {
        let text = "2 cups flour\n1/2 tsp salt\n\nDirections:\nBake for 20 minutes";
        let recipe = parse_text_recipe(Some("Biscuits"), 4, text);
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[0].quantity, Some(2.0));
        assert_eq!(recipe.ingredients[1].quantity, Some(0.5));
        assert_eq!(recipe.tasks.len(), 1);
        assert_eq!(recipe.tasks[0].station, Station::Oven);
        assert_eq!(recipe.tasks[0].duration_minutes, 20);
    }

    #[test]
    fn test_explicit_title_wins() {
        let recipe = parse_text_recipe(Some("Nan's Biscuits"), 6, CLASSIC);
        assert_eq!(recipe.title, "Nan's Biscuits");
    }

    #[test]
    fn test_heading_first_line_gets_placeholder_title() {
        let text = "Ingredients:\n2 cups flour\n\nDirections:\nBake for 20 minutes";
        let recipe = parse_text_recipe(None, 2, text);
        assert_eq!(recipe.title, UNTITLED);
    }

    #[test]
    fn test_only_ingredients_heading() {
        let text = "Ingredients:\n2 cups flour\n1 tsp salt";
        let recipe = parse_text_recipe(None, 2, text);
        assert_eq!(recipe.ingredients.len(), 2);
        assert!(recipe.tasks.is_empty());
    }

    #[test]
    fn test_no_headings_half_split() {
        let text = "2 cups flour\n1 tsp salt\nWhisk everything together\nBake for 20 minutes";
        let recipe = parse_text_recipe(Some("Flatbread"), 2, text);
        // First two lines are ingredients, last two are steps.
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.tasks.len(), 2);
        assert_eq!(recipe.tasks[1].station, Station::Oven);
    }

    #[test]
    fn test_empty_input_is_valid() {
        let recipe = parse_text_recipe(None, 2, "");
        assert_eq!(recipe.title, UNTITLED);
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.tasks.is_empty());
    }

    #[test]
    fn test_fresh_ids_per_parse() {
        let a = parse_text_recipe(None, 4, CLASSIC);
        let b = parse_text_recipe(None, 4, CLASSIC);
        assert_ne!(a.id, b.id);
    }
}
