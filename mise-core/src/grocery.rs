//! Grocery list assembly.
//!
//! Groups the (already scaled) ingredients of a set of recipes into
//! store sections for shopping. Section assignment is keyword matching
//! against a fixed table, first-match-wins.

use serde::{Deserialize, Serialize};

use crate::types::Recipe;

/// Grocery store sections, in shopping-walk order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreSection {
    Produce,
    MeatSeafood,
    DairyEggs,
    Pantry,
    Frozen,
    Bakery,
    Other,
}

impl StoreSection {
    pub const ALL: &'static [StoreSection] = &[
        StoreSection::Produce,
        StoreSection::MeatSeafood,
        StoreSection::DairyEggs,
        StoreSection::Pantry,
        StoreSection::Frozen,
        StoreSection::Bakery,
        StoreSection::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StoreSection::Produce => "Produce",
            StoreSection::MeatSeafood => "Meat & seafood",
            StoreSection::DairyEggs => "Dairy & eggs",
            StoreSection::Pantry => "Pantry",
            StoreSection::Frozen => "Frozen",
            StoreSection::Bakery => "Bakery & bread",
            StoreSection::Other => "Other",
        }
    }
}

const PRODUCE_WORDS: &[&str] = &[
    "tomato", "pepper", "onion", "garlic", "basil", "lettuce", "spinach", "carrot", "celery",
    "potato", "herb", "vegetable", "fruit", "avocado", "mushroom", "olive", "zucchini", "cucumber",
];
const MEAT_SEAFOOD_WORDS: &[&str] = &[
    "sausage", "chicken", "beef", "pork", "turkey", "fish", "salmon", "shrimp", "meat", "thigh",
    "breast", "ground",
];
const DAIRY_EGGS_WORDS: &[&str] = &[
    "egg", "milk", "cream", "cheese", "parmesan", "mozzarella", "butter", "yogurt",
];
const PANTRY_WORDS: &[&str] = &[
    "flour", "sugar", "oil", "stock", "broth", "rice", "pasta", "spice", "salt", "vinegar",
    "sauce", "tortilla",
];
const FROZEN_WORDS: &[&str] = &["frozen"];
const BAKERY_WORDS: &[&str] = &["crust", "bread", "roll", "bagel"];

/// Section keyword rules, evaluated first-match-wins. "pepper" is a
/// produce word, so black pepper files under produce.
const SECTION_RULES: &[(&[&str], StoreSection)] = &[
    (PRODUCE_WORDS, StoreSection::Produce),
    (MEAT_SEAFOOD_WORDS, StoreSection::MeatSeafood),
    (DAIRY_EGGS_WORDS, StoreSection::DairyEggs),
    (PANTRY_WORDS, StoreSection::Pantry),
    (FROZEN_WORDS, StoreSection::Frozen),
    (BAKERY_WORDS, StoreSection::Bakery),
];

/// Classify an ingredient name into a store section.
pub fn classify_ingredient(name: &str) -> StoreSection {
    let lower = name.to_lowercase();
    for (words, section) in SECTION_RULES {
        if words.iter().any(|w| lower.contains(w)) {
            return *section;
        }
    }
    StoreSection::Other
}

/// One line on the shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub section: StoreSection,
    /// Titles of the recipes that use this ingredient.
    pub recipe_titles: Vec<String>,
}

/// A store section with its items, in first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrocerySection {
    pub section: StoreSection,
    pub label: String,
    pub items: Vec<GroceryItem>,
}

/// Build a sectioned grocery list from a set of recipes.
///
/// Ingredients with the same name (case-insensitive) within a section
/// merge into one item. Quantities are summed only when the units agree;
/// a unit mismatch keeps the name and drops the quantity, since "2 cups
/// + 1 lb" has no honest single number.
pub fn build_grocery_list(recipes: &[Recipe]) -> Vec<GrocerySection> {
    let mut sections: Vec<GrocerySection> = StoreSection::ALL
        .iter()
        .map(|&section| GrocerySection {
            section,
            label: section.label().to_string(),
            items: Vec::new(),
        })
        .collect();

    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            let section = classify_ingredient(&ingredient.name);
            let items = &mut sections
                .iter_mut()
                .find(|s| s.section == section)
                .expect("every section is pre-seeded")
                .items;

            match items
                .iter_mut()
                .find(|item| item.name.eq_ignore_ascii_case(&ingredient.name))
            {
                Some(existing) => {
                    if !existing.recipe_titles.contains(&recipe.title) {
                        existing.recipe_titles.push(recipe.title.clone());
                    }
                    if existing.unit == ingredient.unit {
                        existing.quantity = match (existing.quantity, ingredient.quantity) {
                            (Some(a), Some(b)) => Some(a + b),
                            _ => None,
                        };
                    } else {
                        existing.quantity = None;
                        existing.unit = None;
                    }
                }
                None => items.push(GroceryItem {
                    name: ingredient.name.clone(),
                    quantity: ingredient.quantity,
                    unit: ingredient.unit.clone(),
                    section,
                    recipe_titles: vec![recipe.title.clone()],
                }),
            }
        }
    }

    sections.retain(|s| !s.items.is_empty());
    sections
}
