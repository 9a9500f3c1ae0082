//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    Ingredient, IngredientId, NewIngredient, NewRecipe, Recipe, RecipeId,
};
use crate::error::DomainError;

/// Default page size for `fetch_all`
pub const DEFAULT_PAGE_LIMIT: u64 = 100;

/// Repository for Recipe entities
///
/// Recipes returned by read operations carry their ingredients.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Persist a new recipe. Fails with `AlreadyExists` on a duplicate name.
    async fn create(&self, recipe: &NewRecipe) -> Result<Recipe, DomainError>;

    /// Find a recipe by ID
    async fn fetch_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, DomainError>;

    /// Find a recipe by exact name
    async fn fetch_by_name(&self, name: &str) -> Result<Option<Recipe>, DomainError>;

    /// List recipes in insertion order
    async fn fetch_all(&self, offset: u64, limit: u64) -> Result<Vec<Recipe>, DomainError>;

    /// Replace every mutable field of the recipe with the given id
    async fn update(&self, recipe: &Recipe) -> Result<Recipe, DomainError>;

    /// Delete a recipe and all of its ingredients atomically.
    ///
    /// Returns the number of ingredients removed.
    async fn delete(&self, id: RecipeId) -> Result<u64, DomainError>;
}

/// Repository for Ingredient entities
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    /// Persist a new ingredient.
    ///
    /// Fails with `AlreadyExists` on a duplicate name and `NotFound` when the
    /// referenced recipe does not exist.
    async fn create(&self, ingredient: &NewIngredient) -> Result<Ingredient, DomainError>;

    /// Find an ingredient by ID
    async fn fetch_by_id(&self, id: IngredientId) -> Result<Option<Ingredient>, DomainError>;

    /// Find an ingredient by name, ignoring case
    async fn fetch_by_name(&self, name: &str) -> Result<Option<Ingredient>, DomainError>;

    /// List ingredients in insertion order
    async fn fetch_all(&self, offset: u64, limit: u64) -> Result<Vec<Ingredient>, DomainError>;

    /// Replace every mutable field of the ingredient with the given id
    async fn update(&self, ingredient: &Ingredient) -> Result<Ingredient, DomainError>;

    /// Delete an ingredient
    async fn delete(&self, id: IngredientId) -> Result<(), DomainError>;
}
