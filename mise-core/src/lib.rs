pub mod capacity;
pub mod error;
pub mod grocery;
pub mod ingredient_parser;
pub mod recipe_parser;
pub mod requests;
pub mod scaler;
pub mod scheduler;
pub mod step_parser;
pub mod types;

pub use capacity::analyze_capacity;
pub use error::ParseError;
pub use grocery::{build_grocery_list, classify_ingredient, GroceryItem, GrocerySection, StoreSection};
pub use recipe_parser::parse_text_recipe;
pub use requests::{
    build_schedule_request, parse_recipe_request, BuildScheduleRequest, ParseRecipeRequest,
};
pub use scaler::scale_recipe;
pub use scheduler::build_schedule;
pub use types::{
    AtomicTask, CapacityProfile, Ingredient, Recipe, Schedule, ScheduleLane, ScheduledTask,
    Station, Warning,
};
