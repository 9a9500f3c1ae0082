//! In-memory implementations of repository ports
//!
//! Both repositories share one `InMemoryStore` so that cascade delete and
//! the recipe foreign key behave like the database: a recipe delete removes
//! its ingredients under the same lock, and an ingredient cannot reference a
//! missing recipe.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Ingredient, IngredientId, NewIngredient, NewRecipe, Recipe, RecipeId, INGREDIENT_EXISTS,
    INGREDIENT_NOT_FOUND, RECIPE_EXISTS, RECIPE_NOT_FOUND,
};
use crate::domain::ports::{IngredientRepository, RecipeRepository};
use crate::error::DomainError;

// ============================================================================
// Shared store
// ============================================================================

#[derive(Default)]
struct StoreState {
    /// Stored without ingredients; they are attached on read
    recipes: BTreeMap<RecipeId, Recipe>,
    ingredients: BTreeMap<IngredientId, Ingredient>,
    next_recipe_id: i32,
    next_ingredient_id: i32,
}

impl StoreState {
    fn attach_ingredients(&self, recipe: &Recipe) -> Recipe {
        let mut recipe = recipe.clone();
        recipe.ingredients = self
            .ingredients
            .values()
            .filter(|i| i.recipe_id == recipe.id)
            .cloned()
            .collect();
        recipe
    }
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recipes(&self) -> InMemoryRecipeRepository {
        InMemoryRecipeRepository {
            store: self.clone(),
        }
    }

    pub fn ingredients(&self) -> InMemoryIngredientRepository {
        InMemoryIngredientRepository {
            store: self.clone(),
        }
    }

    /// Make every repository call fail with a database error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn ingredient_count(&self) -> usize {
        self.state.read().unwrap().ingredients.len()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(DomainError::Database("simulated outage".to_string()))
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// In-Memory Recipe Repository
// ============================================================================

pub struct InMemoryRecipeRepository {
    store: InMemoryStore,
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn create(&self, new_recipe: &NewRecipe) -> Result<Recipe, DomainError> {
        self.store.check()?;
        let mut state = self.store.state.write().unwrap();

        if state.recipes.values().any(|r| r.name == new_recipe.name) {
            return Err(DomainError::AlreadyExists(RECIPE_EXISTS.to_string()));
        }

        state.next_recipe_id += 1;
        let recipe = Recipe {
            id: RecipeId(state.next_recipe_id),
            name: new_recipe.name.clone(),
            calories: new_recipe.calories,
            description: new_recipe.description.clone(),
            ingredients: Vec::new(),
        };
        state.recipes.insert(recipe.id, recipe.clone());

        Ok(recipe)
    }

    async fn fetch_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, DomainError> {
        self.store.check()?;
        let state = self.store.state.read().unwrap();
        Ok(state.recipes.get(&id).map(|r| state.attach_ingredients(r)))
    }

    async fn fetch_by_name(&self, name: &str) -> Result<Option<Recipe>, DomainError> {
        self.store.check()?;
        let state = self.store.state.read().unwrap();
        Ok(state
            .recipes
            .values()
            .find(|r| r.name == name)
            .map(|r| state.attach_ingredients(r)))
    }

    async fn fetch_all(&self, offset: u64, limit: u64) -> Result<Vec<Recipe>, DomainError> {
        self.store.check()?;
        let state = self.store.state.read().unwrap();
        Ok(state
            .recipes
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|r| state.attach_ingredients(r))
            .collect())
    }

    async fn update(&self, recipe: &Recipe) -> Result<Recipe, DomainError> {
        self.store.check()?;
        let mut state = self.store.state.write().unwrap();

        if !state.recipes.contains_key(&recipe.id) {
            return Err(DomainError::NotFound(RECIPE_NOT_FOUND.to_string()));
        }
        if state
            .recipes
            .values()
            .any(|r| r.id != recipe.id && r.name == recipe.name)
        {
            return Err(DomainError::AlreadyExists(RECIPE_EXISTS.to_string()));
        }

        let mut stored = recipe.clone();
        stored.ingredients = Vec::new();
        state.recipes.insert(stored.id, stored);

        Ok(state.attach_ingredients(recipe))
    }

    async fn delete(&self, id: RecipeId) -> Result<u64, DomainError> {
        self.store.check()?;
        let mut state = self.store.state.write().unwrap();

        if state.recipes.remove(&id).is_none() {
            return Err(DomainError::NotFound(RECIPE_NOT_FOUND.to_string()));
        }

        let before = state.ingredients.len();
        state.ingredients.retain(|_, i| i.recipe_id != id);
        Ok((before - state.ingredients.len()) as u64)
    }
}

// ============================================================================
// In-Memory Ingredient Repository
// ============================================================================

/// Ingredient names are unique without regard to case
fn same_ingredient_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

pub struct InMemoryIngredientRepository {
    store: InMemoryStore,
}

#[async_trait]
impl IngredientRepository for InMemoryIngredientRepository {
    async fn create(&self, new_ingredient: &NewIngredient) -> Result<Ingredient, DomainError> {
        self.store.check()?;
        let mut state = self.store.state.write().unwrap();

        if state
            .ingredients
            .values()
            .any(|i| same_ingredient_name(&i.name, &new_ingredient.name))
        {
            return Err(DomainError::AlreadyExists(INGREDIENT_EXISTS.to_string()));
        }
        if !state.recipes.contains_key(&new_ingredient.recipe_id) {
            return Err(DomainError::NotFound(RECIPE_NOT_FOUND.to_string()));
        }

        state.next_ingredient_id += 1;
        let ingredient = Ingredient {
            id: IngredientId(state.next_ingredient_id),
            name: new_ingredient.name.clone(),
            price: new_ingredient.price,
            quantity: new_ingredient.quantity,
            description: new_ingredient.description.clone(),
            recipe_id: new_ingredient.recipe_id,
        };
        state.ingredients.insert(ingredient.id, ingredient.clone());

        Ok(ingredient)
    }

    async fn fetch_by_id(&self, id: IngredientId) -> Result<Option<Ingredient>, DomainError> {
        self.store.check()?;
        let state = self.store.state.read().unwrap();
        Ok(state.ingredients.get(&id).cloned())
    }

    async fn fetch_by_name(&self, name: &str) -> Result<Option<Ingredient>, DomainError> {
        self.store.check()?;
        let state = self.store.state.read().unwrap();
        Ok(state
            .ingredients
            .values()
            .find(|i| same_ingredient_name(&i.name, name))
            .cloned())
    }

    async fn fetch_all(&self, offset: u64, limit: u64) -> Result<Vec<Ingredient>, DomainError> {
        self.store.check()?;
        let state = self.store.state.read().unwrap();
        Ok(state
            .ingredients
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, ingredient: &Ingredient) -> Result<Ingredient, DomainError> {
        self.store.check()?;
        let mut state = self.store.state.write().unwrap();

        if !state.ingredients.contains_key(&ingredient.id) {
            return Err(DomainError::NotFound(INGREDIENT_NOT_FOUND.to_string()));
        }
        if state
            .ingredients
            .values()
            .any(|i| i.id != ingredient.id && same_ingredient_name(&i.name, &ingredient.name))
        {
            return Err(DomainError::AlreadyExists(INGREDIENT_EXISTS.to_string()));
        }
        if !state.recipes.contains_key(&ingredient.recipe_id) {
            return Err(DomainError::NotFound(RECIPE_NOT_FOUND.to_string()));
        }

        state.ingredients.insert(ingredient.id, ingredient.clone());
        Ok(ingredient.clone())
    }

    async fn delete(&self, id: IngredientId) -> Result<(), DomainError> {
        self.store.check()?;
        let mut state = self.store.state.write().unwrap();

        match state.ingredients.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::NotFound(INGREDIENT_NOT_FOUND.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{new_ingredient, new_recipe};

    #[tokio::test]
    async fn create_rejects_name_differing_only_in_case() {
        let store = InMemoryStore::new();
        let recipes = store.recipes();
        let ingredients = store.ingredients();

        let soup = recipes.create(&new_recipe("Soup")).await.unwrap();
        ingredients
            .create(&new_ingredient("Salt", soup.id))
            .await
            .unwrap();

        let result = ingredients.create(&new_ingredient("salt", soup.id)).await;
        assert!(matches!(result, Err(DomainError::AlreadyExists(_))));
        assert_eq!(store.ingredient_count(), 1);
    }

    #[tokio::test]
    async fn update_rejects_rename_onto_other_name_in_other_case() {
        let store = InMemoryStore::new();
        let recipes = store.recipes();
        let ingredients = store.ingredients();

        let soup = recipes.create(&new_recipe("Soup")).await.unwrap();
        ingredients
            .create(&new_ingredient("Salt", soup.id))
            .await
            .unwrap();
        let pepper = ingredients
            .create(&new_ingredient("Pepper", soup.id))
            .await
            .unwrap();

        let renamed = pepper.clone().with_fields(NewIngredient {
            name: "SALT".to_string(),
            ..pepper.fields()
        });
        let result = ingredients.update(&renamed).await;
        assert!(matches!(result, Err(DomainError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn delete_only_removes_own_ingredients() {
        let store = InMemoryStore::new();
        let recipes = store.recipes();
        let ingredients = store.ingredients();

        let soup = recipes.create(&new_recipe("Soup")).await.unwrap();
        let salad = recipes.create(&new_recipe("Salad")).await.unwrap();
        ingredients
            .create(&new_ingredient("Leek", soup.id))
            .await
            .unwrap();
        ingredients
            .create(&new_ingredient("Lettuce", salad.id))
            .await
            .unwrap();

        let removed = recipes.delete(soup.id).await.unwrap();
        assert_eq!(removed, 1);
        assert_eq!(store.ingredient_count(), 1);
        assert_eq!(
            recipes.fetch_by_id(salad.id).await.unwrap().unwrap().ingredients.len(),
            1
        );
    }
}
