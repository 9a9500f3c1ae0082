//! Recipe domain entity
//!
//! The container resource. A recipe owns zero or more ingredients.

use serde::{Deserialize, Serialize};

use super::ingredient::Ingredient;

pub const RECIPE_NOT_FOUND: &str = "Recipe not found";
pub const RECIPE_EXISTS: &str = "Recipe already exists!";

/// Unique identifier for a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecipeId(pub i32);

impl From<i32> for RecipeId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored recipe together with its ingredients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub calories: i32,
    pub description: Option<String>,
    /// Populated on read, ordered by ingredient id
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Replace every mutable field, keeping the id and loaded ingredients
    pub fn with_fields(self, fields: NewRecipe) -> Self {
        Recipe {
            id: self.id,
            name: fields.name,
            calories: fields.calories,
            description: fields.description,
            ingredients: self.ingredients,
        }
    }

    /// The mutable fields of this recipe
    pub fn fields(&self) -> NewRecipe {
        NewRecipe {
            name: self.name.clone(),
            calories: self.calories,
            description: self.description.clone(),
        }
    }
}

/// Data needed to create a new recipe
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecipe {
    pub name: String,
    pub calories: i32,
    pub description: Option<String>,
}
