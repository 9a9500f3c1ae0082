//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod activity;
pub mod repositories;

pub use activity::{Activity, ActivityClient};
pub use repositories::{IngredientRepository, RecipeRepository};

#[cfg(test)]
pub use activity::MockActivityClient;
