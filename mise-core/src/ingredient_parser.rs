//! Ingredient line parsing.
//!
//! Parses raw ingredient lines (e.g., "2 cups flour, sifted") into
//! structured [`Ingredient`] values. Parsing is best-effort: a line that
//! doesn't match the quantity/unit grammar still becomes an ingredient
//! with just a name.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::types::Ingredient;

/// Common cooking units, singular and plural forms.
/// Sorted by length at regex-build time (longest first) so abbreviations
/// never shadow their long forms in the alternation.
const UNITS: &[&str] = &[
    // Volume
    "cup",
    "cups",
    "tablespoon",
    "tablespoons",
    "tbsp",
    "teaspoon",
    "teaspoons",
    "tsp",
    "milliliter",
    "milliliters",
    "ml",
    "liter",
    "liters",
    "l",
    // Weight
    "ounce",
    "ounces",
    "oz",
    "pound",
    "pounds",
    "lb",
    "lbs",
    "gram",
    "grams",
    "g",
    "kilogram",
    "kilograms",
    "kg",
    // Count
    "clove",
    "cloves",
    "piece",
    "pieces",
    "slice",
    "slices",
    "dash",
    "dashes",
    "pinch",
    "pinches",
    "halves",
    // Size descriptors that act like units
    "large",
    "medium",
    "small",
    "whole",
];

/// Matches `<quantity> <unit> <rest>` where quantity is an integer,
/// decimal, simple fraction ("1/2"), or mixed number ("1 1/2").
static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let mut units = UNITS.to_vec();
    units.sort_by(|a, b| b.len().cmp(&a.len()));
    let pattern = format!(
        r"(?i)^(\d+(?:\.\d+)?|(?:\d+\s+)?\d+/\d+)\s+({})\s+(.+)$",
        units.join("|")
    );
    Regex::new(&pattern).expect("Invalid ingredient line regex")
});

/// Parse a quantity string (integer, decimal, fraction, or mixed number)
/// into a decimal value.
pub fn parse_quantity(qty: &str) -> Result<f64, ParseError> {
    let qty = qty.trim();

    if qty.contains('/') {
        let parts: Vec<&str> = qty.split_whitespace().collect();
        return match parts.as_slice() {
            [frac] => parse_fraction(frac),
            [whole, frac] => {
                let whole: f64 = whole
                    .parse()
                    .map_err(|_| ParseError::InvalidQuantity(qty.to_string()))?;
                Ok(whole + parse_fraction(frac)?)
            }
            _ => Err(ParseError::InvalidQuantity(qty.to_string())),
        };
    }

    qty.parse()
        .map_err(|_| ParseError::InvalidQuantity(qty.to_string()))
}

/// Parse a simple fraction like "1/2". A zero denominator is invalid.
fn parse_fraction(s: &str) -> Result<f64, ParseError> {
    let (num, den) = s
        .split_once('/')
        .ok_or_else(|| ParseError::InvalidQuantity(s.to_string()))?;
    let num: f64 = num
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidQuantity(s.to_string()))?;
    let den: f64 = den
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidQuantity(s.to_string()))?;
    if den == 0.0 {
        return Err(ParseError::InvalidQuantity(s.to_string()));
    }
    Ok(num / den)
}

/// Parse one ingredient line.
///
/// Returns `Err(ParseError::InvalidQuantity)` only when a recognized
/// quantity token fails numeric conversion; callers skip that line and
/// keep going.
pub fn parse_ingredient_line(line: &str) -> Result<Ingredient, ParseError> {
    if let Some(caps) = LINE_RE.captures(line) {
        let quantity = parse_quantity(&caps[1])?;
        let unit = caps[2].to_lowercase();
        let (name, notes) = split_name_and_notes(&caps[3]);
        return Ok(Ingredient {
            name,
            quantity: Some(quantity),
            unit: Some(unit),
            notes,
            normalized_grams: None,
        });
    }

    // No quantity/unit prefix: the whole line is the ingredient name.
    let (name, notes) = split_name_and_notes(line);
    Ok(Ingredient {
        name,
        quantity: None,
        unit: None,
        notes,
        normalized_grams: None,
    })
}

/// Split on the first comma into name and notes.
fn split_name_and_notes(rest: &str) -> (String, Option<String>) {
    match rest.split_once(',') {
        Some((name, notes)) => (name.trim().to_string(), Some(notes.trim().to_string())),
        None => (rest.trim().to_string(), None),
    }
}

/// Parse an ingredients text block, one ingredient per line.
///
/// Blank lines and `#` comment lines are skipped. Lines with malformed
/// quantities are dropped individually; the rest of the block still
/// parses.
pub fn parse_ingredients(text: &str) -> Vec<Ingredient> {
    let mut ingredients = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_ingredient_line(line) {
            Ok(ingredient) => ingredients.push(ingredient),
            Err(err) => {
                tracing::debug!("Skipping ingredient line {:?}: {}", line, err);
            }
        }
    }
    ingredients
}
