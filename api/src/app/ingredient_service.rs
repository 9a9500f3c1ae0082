//! Ingredient service
//!
//! Business rules for ingredients: unique names (case-insensitive) and the
//! requirement that every ingredient references an existing recipe.

use std::sync::Arc;

use crate::domain::entities::{
    Ingredient, IngredientId, NewIngredient, RecipeId, INGREDIENT_EXISTS, INGREDIENT_NOT_FOUND,
    RECIPE_NOT_FOUND,
};
use crate::domain::ports::{IngredientRepository, RecipeRepository};
use crate::error::AppError;

/// Service for managing ingredients
pub struct IngredientService {
    ingredients: Arc<dyn IngredientRepository>,
    recipes: Arc<dyn RecipeRepository>,
}

impl IngredientService {
    pub fn new(
        ingredients: Arc<dyn IngredientRepository>,
        recipes: Arc<dyn RecipeRepository>,
    ) -> Self {
        Self {
            ingredients,
            recipes,
        }
    }

    async fn ensure_recipe_exists(&self, recipe_id: RecipeId) -> Result<(), AppError> {
        match self.recipes.fetch_by_id(recipe_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found(RECIPE_NOT_FOUND)),
        }
    }

    /// Create an ingredient under an existing recipe
    pub async fn create(&self, ingredient: NewIngredient) -> Result<Ingredient, AppError> {
        if self
            .ingredients
            .fetch_by_name(&ingredient.name)
            .await?
            .is_some()
        {
            tracing::debug!(name = %ingredient.name, "Rejected duplicate ingredient");
            return Err(AppError::already_exists(INGREDIENT_EXISTS));
        }

        self.ensure_recipe_exists(ingredient.recipe_id).await?;

        let ingredient = self.ingredients.create(&ingredient).await?;
        tracing::info!(
            ingredient_id = %ingredient.id,
            recipe_id = %ingredient.recipe_id,
            "Ingredient created"
        );
        Ok(ingredient)
    }

    /// List ingredients, or the single ingredient matching `name`
    pub async fn list(
        &self,
        name: Option<&str>,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Ingredient>, AppError> {
        match name {
            Some(name) => {
                let ingredient = self
                    .ingredients
                    .fetch_by_name(name)
                    .await?
                    .ok_or_else(|| AppError::not_found(INGREDIENT_NOT_FOUND))?;
                Ok(vec![ingredient])
            }
            None => Ok(self.ingredients.fetch_all(offset, limit).await?),
        }
    }

    pub async fn get(&self, id: IngredientId) -> Result<Ingredient, AppError> {
        self.ingredients
            .fetch_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(INGREDIENT_NOT_FOUND))
    }

    /// Overlay new field values onto a stored ingredient and persist it.
    ///
    /// Moving the ingredient to another recipe requires that recipe to exist.
    pub async fn update<F>(&self, id: IngredientId, overlay: F) -> Result<Ingredient, AppError>
    where
        F: FnOnce(NewIngredient) -> NewIngredient,
    {
        let existing = self.get(id).await?;
        let fields = overlay(existing.fields());

        if let Some(other) = self.ingredients.fetch_by_name(&fields.name).await? {
            if other.id != id {
                return Err(AppError::already_exists(INGREDIENT_EXISTS));
            }
        }

        if fields.recipe_id != existing.recipe_id {
            self.ensure_recipe_exists(fields.recipe_id).await?;
        }

        let updated = self
            .ingredients
            .update(&existing.with_fields(fields))
            .await?;
        tracing::info!(ingredient_id = %id, "Ingredient updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: IngredientId) -> Result<(), AppError> {
        self.get(id).await?;

        self.ingredients.delete(id).await?;
        tracing::info!(ingredient_id = %id, "Ingredient deleted");
        Ok(())
    }
}
