//! Recipe service
//!
//! Business rules for recipes: unique names, existence checks, and
//! cascade delete through the repository.

use std::sync::Arc;

use crate::domain::entities::{NewRecipe, Recipe, RecipeId, RECIPE_EXISTS, RECIPE_NOT_FOUND};
use crate::domain::ports::RecipeRepository;
use crate::error::AppError;

/// Service for managing recipes
pub struct RecipeService {
    recipes: Arc<dyn RecipeRepository>,
}

impl RecipeService {
    pub fn new(recipes: Arc<dyn RecipeRepository>) -> Self {
        Self { recipes }
    }

    /// Create a recipe, rejecting duplicate names
    pub async fn create(&self, recipe: NewRecipe) -> Result<Recipe, AppError> {
        if self.recipes.fetch_by_name(&recipe.name).await?.is_some() {
            tracing::debug!(name = %recipe.name, "Rejected duplicate recipe");
            return Err(AppError::already_exists(RECIPE_EXISTS));
        }

        let recipe = self.recipes.create(&recipe).await?;
        tracing::info!(recipe_id = %recipe.id, name = %recipe.name, "Recipe created");
        Ok(recipe)
    }

    /// List recipes, or the single recipe matching `name`
    pub async fn list(
        &self,
        name: Option<&str>,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Recipe>, AppError> {
        match name {
            Some(name) => {
                let recipe = self
                    .recipes
                    .fetch_by_name(name)
                    .await?
                    .ok_or_else(|| AppError::not_found(RECIPE_NOT_FOUND))?;
                Ok(vec![recipe])
            }
            None => Ok(self.recipes.fetch_all(offset, limit).await?),
        }
    }

    pub async fn get(&self, id: RecipeId) -> Result<Recipe, AppError> {
        self.recipes
            .fetch_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(RECIPE_NOT_FOUND))
    }

    /// Overlay new field values onto a stored recipe and persist it.
    ///
    /// `overlay` receives the stored fields and returns the replacement.
    pub async fn update<F>(&self, id: RecipeId, overlay: F) -> Result<Recipe, AppError>
    where
        F: FnOnce(NewRecipe) -> NewRecipe,
    {
        let existing = self.get(id).await?;
        let fields = overlay(existing.fields());

        if let Some(other) = self.recipes.fetch_by_name(&fields.name).await? {
            if other.id != id {
                return Err(AppError::already_exists(RECIPE_EXISTS));
            }
        }

        let updated = self.recipes.update(&existing.with_fields(fields)).await?;
        tracing::info!(recipe_id = %id, "Recipe updated");
        Ok(updated)
    }

    /// Delete a recipe and every ingredient that belongs to it
    pub async fn delete(&self, id: RecipeId) -> Result<(), AppError> {
        self.get(id).await?;

        let removed = self.recipes.delete(id).await?;
        tracing::info!(recipe_id = %id, ingredients_removed = removed, "Recipe deleted");
        Ok(())
    }
}
