//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod activities;
pub mod extract;
pub mod ingredients;
pub mod recipes;

pub use activities::get_activity;
pub use ingredients::{
    create_ingredient, delete_ingredient, get_ingredient, list_ingredients, update_ingredient,
};
pub use recipes::{create_recipe, delete_recipe, get_recipe, list_recipes, update_recipe};
