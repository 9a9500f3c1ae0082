//! Ingredient shapes

use serde::{Deserialize, Serialize};

use super::{double_option, validate_description, validate_name, Validate};
use crate::domain::entities::{Ingredient, NewIngredient, RecipeId};
use crate::error::DomainError;

/// Request body for POST /ingredients
#[derive(Debug, Deserialize)]
pub struct IngredientCreate {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    pub recipe_id: i32,
}

impl Validate for IngredientCreate {
    fn validate(&self) -> Result<(), DomainError> {
        validate_name(&self.name)?;
        validate_price(self.price)?;
        validate_quantity(self.quantity)?;
        validate_description(self.description.as_deref())?;
        validate_recipe_id(self.recipe_id)
    }
}

impl From<IngredientCreate> for NewIngredient {
    fn from(request: IngredientCreate) -> Self {
        NewIngredient {
            name: request.name,
            price: request.price,
            quantity: request.quantity,
            description: request.description,
            recipe_id: RecipeId(request.recipe_id),
        }
    }
}

/// Request body for PUT /ingredients/:id
///
/// Absent fields keep their stored value; `quantity` and `description`
/// are cleared by an explicit null.
#[derive(Debug, Default, Deserialize)]
pub struct IngredientUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    pub quantity: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub recipe_id: Option<i32>,
}

impl IngredientUpdate {
    pub fn apply(self, current: NewIngredient) -> NewIngredient {
        NewIngredient {
            name: self.name.unwrap_or(current.name),
            price: self.price.unwrap_or(current.price),
            quantity: self.quantity.unwrap_or(current.quantity),
            description: self.description.unwrap_or(current.description),
            recipe_id: self.recipe_id.map(RecipeId).unwrap_or(current.recipe_id),
        }
    }
}

impl Validate for IngredientUpdate {
    fn validate(&self) -> Result<(), DomainError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(quantity) = self.quantity {
            validate_quantity(quantity)?;
        }
        if let Some(description) = &self.description {
            validate_description(description.as_deref())?;
        }
        if let Some(recipe_id) = self.recipe_id {
            validate_recipe_id(recipe_id)?;
        }
        Ok(())
    }
}

/// Ingredient as returned by the API
#[derive(Debug, Serialize, Deserialize)]
pub struct IngredientResponse {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub quantity: Option<i32>,
    pub description: Option<String>,
    pub recipe_id: i32,
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        IngredientResponse {
            id: ingredient.id.0,
            name: ingredient.name,
            price: ingredient.price,
            quantity: ingredient.quantity,
            description: ingredient.description,
            recipe_id: ingredient.recipe_id.0,
        }
    }
}

fn validate_price(price: f64) -> Result<(), DomainError> {
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::Validation(
            "price must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}

fn validate_quantity(quantity: Option<i32>) -> Result<(), DomainError> {
    match quantity {
        Some(q) if q < 0 => Err(DomainError::Validation(
            "quantity must not be negative".to_string(),
        )),
        _ => Ok(()),
    }
}

fn validate_recipe_id(recipe_id: i32) -> Result<(), DomainError> {
    if recipe_id <= 0 {
        return Err(DomainError::Validation(
            "recipe_id must be a positive integer".to_string(),
        ));
    }
    Ok(())
}
