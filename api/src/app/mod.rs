//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod ingredient_service;
pub mod recipe_service;

pub use ingredient_service::IngredientService;
pub use recipe_service::RecipeService;
