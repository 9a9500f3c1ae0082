//! Ingredient domain entity
//!
//! The dependent resource. Every ingredient belongs to exactly one recipe.

use serde::{Deserialize, Serialize};

use super::recipe::RecipeId;

pub const INGREDIENT_NOT_FOUND: &str = "Ingredient not found";
pub const INGREDIENT_EXISTS: &str = "Ingredient already exists!";

/// Unique identifier for an ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IngredientId(pub i32);

impl From<i32> for IngredientId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for IngredientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored ingredient
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    pub price: f64,
    pub quantity: Option<i32>,
    pub description: Option<String>,
    pub recipe_id: RecipeId,
}

impl Ingredient {
    pub fn with_fields(self, fields: NewIngredient) -> Self {
        Ingredient {
            id: self.id,
            name: fields.name,
            price: fields.price,
            quantity: fields.quantity,
            description: fields.description,
            recipe_id: fields.recipe_id,
        }
    }

    pub fn fields(&self) -> NewIngredient {
        NewIngredient {
            name: self.name.clone(),
            price: self.price,
            quantity: self.quantity,
            description: self.description.clone(),
            recipe_id: self.recipe_id,
        }
    }
}

/// Data needed to create a new ingredient
#[derive(Debug, Clone, PartialEq)]
pub struct NewIngredient {
    pub name: String,
    pub price: f64,
    pub quantity: Option<i32>,
    pub description: Option<String>,
    pub recipe_id: RecipeId,
}
