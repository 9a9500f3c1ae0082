//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod ingredient;
pub mod recipe;

pub use ingredient::{
    Ingredient, IngredientId, NewIngredient, INGREDIENT_EXISTS, INGREDIENT_NOT_FOUND,
};
pub use recipe::{NewRecipe, Recipe, RecipeId, RECIPE_EXISTS, RECIPE_NOT_FOUND};
