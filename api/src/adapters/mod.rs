//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod activity;
pub mod postgres;

pub use activity::HttpActivityClient;
pub use postgres::{ensure_schema, PostgresIngredientRepository, PostgresRecipeRepository};
