//! Recipe shapes

use serde::{Deserialize, Serialize};

use super::{double_option, validate_description, validate_name, IngredientResponse, Validate};
use crate::domain::entities::{NewRecipe, Recipe};
use crate::error::DomainError;

/// Request body for POST /recipes
#[derive(Debug, Deserialize)]
pub struct RecipeCreate {
    pub name: String,
    pub calories: i32,
    #[serde(default)]
    pub description: Option<String>,
}

impl Validate for RecipeCreate {
    fn validate(&self) -> Result<(), DomainError> {
        validate_name(&self.name)?;
        validate_description(self.description.as_deref())
    }
}

impl From<RecipeCreate> for NewRecipe {
    fn from(request: RecipeCreate) -> Self {
        NewRecipe {
            name: request.name,
            calories: request.calories,
            description: request.description,
        }
    }
}

/// Request body for PUT /recipes/:id
///
/// Accepts a full recipe; `id` and `ingredients` in the body are ignored.
/// Absent fields keep their stored value, `"description": null` clears it.
#[derive(Debug, Default, Deserialize)]
pub struct RecipeUpdate {
    pub name: Option<String>,
    pub calories: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

impl RecipeUpdate {
    /// Overlay the submitted fields onto the stored ones
    pub fn apply(self, current: NewRecipe) -> NewRecipe {
        NewRecipe {
            name: self.name.unwrap_or(current.name),
            calories: self.calories.unwrap_or(current.calories),
            description: self.description.unwrap_or(current.description),
        }
    }
}

impl Validate for RecipeUpdate {
    fn validate(&self) -> Result<(), DomainError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(description) = &self.description {
            validate_description(description.as_deref())?;
        }
        Ok(())
    }
}

/// Recipe as returned by the API, with its ingredients
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub id: i32,
    pub name: String,
    pub calories: i32,
    pub description: Option<String>,
    pub ingredients: Vec<IngredientResponse>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        RecipeResponse {
            id: recipe.id.0,
            name: recipe.name,
            calories: recipe.calories,
            description: recipe.description,
            ingredients: recipe.ingredients.into_iter().map(Into::into).collect(),
        }
    }
}
