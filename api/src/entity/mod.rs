//! SeaORM entities
//!
//! Table models for the `recipes` and `ingredients` tables.

pub mod ingredients;
pub mod recipes;
