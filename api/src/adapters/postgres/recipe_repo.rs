//! PostgreSQL adapter for RecipeRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

use super::ingredient_repo::load_for_recipes;
use super::{database_error, map_write_error};
use crate::domain::entities::{
    Ingredient, NewRecipe, Recipe, RecipeId, RECIPE_EXISTS, RECIPE_NOT_FOUND,
};
use crate::domain::ports::RecipeRepository;
use crate::entity::{ingredients, recipes};
use crate::error::DomainError;

/// PostgreSQL implementation of RecipeRepository
pub struct PostgresRecipeRepository {
    db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attach ingredients to recipe rows, keeping the row order
    async fn with_ingredients(
        &self,
        models: Vec<recipes::Model>,
    ) -> Result<Vec<Recipe>, DomainError> {
        let ids: Vec<RecipeId> = models.iter().map(|m| RecipeId(m.id)).collect();

        let mut by_recipe: HashMap<RecipeId, Vec<Ingredient>> = HashMap::new();
        for ingredient in load_for_recipes(&self.db, &ids).await? {
            by_recipe
                .entry(ingredient.recipe_id)
                .or_default()
                .push(ingredient);
        }

        Ok(models
            .into_iter()
            .map(|m| {
                let ingredients = by_recipe.remove(&RecipeId(m.id)).unwrap_or_default();
                into_recipe(m, ingredients)
            })
            .collect())
    }

    async fn with_ingredients_one(
        &self,
        model: Option<recipes::Model>,
    ) -> Result<Option<Recipe>, DomainError> {
        match model {
            Some(model) => Ok(self.with_ingredients(vec![model]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl RecipeRepository for PostgresRecipeRepository {
    async fn create(&self, recipe: &NewRecipe) -> Result<Recipe, DomainError> {
        let model = recipes::ActiveModel {
            name: Set(recipe.name.clone()),
            calories: Set(recipe.calories),
            description: Set(recipe.description.clone()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_error(e, RECIPE_EXISTS, RECIPE_NOT_FOUND))?;

        Ok(into_recipe(result, Vec::new()))
    }

    async fn fetch_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, DomainError> {
        let result = recipes::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(database_error)?;

        self.with_ingredients_one(result).await
    }

    async fn fetch_by_name(&self, name: &str) -> Result<Option<Recipe>, DomainError> {
        let result = recipes::Entity::find()
            .filter(recipes::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(database_error)?;

        self.with_ingredients_one(result).await
    }

    async fn fetch_all(&self, offset: u64, limit: u64) -> Result<Vec<Recipe>, DomainError> {
        let results = recipes::Entity::find()
            .order_by_asc(recipes::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(database_error)?;

        self.with_ingredients(results).await
    }

    async fn update(&self, recipe: &Recipe) -> Result<Recipe, DomainError> {
        let result = recipes::ActiveModel {
            id: Set(recipe.id.0),
            name: Set(recipe.name.clone()),
            calories: Set(recipe.calories),
            description: Set(recipe.description.clone()),
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => DomainError::NotFound(RECIPE_NOT_FOUND.to_string()),
            e => map_write_error(e, RECIPE_EXISTS, RECIPE_NOT_FOUND),
        })?;

        self.with_ingredients_one(Some(result))
            .await?
            .ok_or_else(|| DomainError::NotFound(RECIPE_NOT_FOUND.to_string()))
    }

    async fn delete(&self, id: RecipeId) -> Result<u64, DomainError> {
        // Ingredients and recipe go together; dropping `txn` without commit rolls back
        let txn = self.db.begin().await.map_err(database_error)?;

        let removed = ingredients::Entity::delete_many()
            .filter(ingredients::Column::RecipeId.eq(id.0))
            .exec(&txn)
            .await
            .map_err(database_error)?;

        let result = recipes::Entity::delete_by_id(id.0)
            .exec(&txn)
            .await
            .map_err(database_error)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(RECIPE_NOT_FOUND.to_string()));
        }

        txn.commit().await.map_err(database_error)?;

        Ok(removed.rows_affected)
    }
}

/// Convert SeaORM model plus loaded ingredients to domain entity
fn into_recipe(model: recipes::Model, ingredients: Vec<Ingredient>) -> Recipe {
    Recipe {
        id: RecipeId(model.id),
        name: model.name,
        calories: model.calories,
        description: model.description,
        ingredients,
    }
}
