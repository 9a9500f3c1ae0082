//! PostgreSQL adapter for IngredientRepository

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use super::{database_error, map_write_error};
use crate::domain::entities::{
    Ingredient, IngredientId, NewIngredient, RecipeId, INGREDIENT_EXISTS, INGREDIENT_NOT_FOUND,
    RECIPE_NOT_FOUND,
};
use crate::domain::ports::IngredientRepository;
use crate::entity::ingredients;
use crate::error::DomainError;

/// PostgreSQL implementation of IngredientRepository
pub struct PostgresIngredientRepository {
    db: DatabaseConnection,
}

impl PostgresIngredientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Load the ingredients of the given recipes, ordered by id.
///
/// Shared with the recipe adapter so recipes come back with their ingredients.
pub(super) async fn load_for_recipes<C: ConnectionTrait>(
    db: &C,
    recipe_ids: &[RecipeId],
) -> Result<Vec<Ingredient>, DomainError> {
    if recipe_ids.is_empty() {
        return Ok(Vec::new());
    }

    let results = ingredients::Entity::find()
        .filter(ingredients::Column::RecipeId.is_in(recipe_ids.iter().map(|id| id.0)))
        .order_by_asc(ingredients::Column::Id)
        .all(db)
        .await
        .map_err(database_error)?;

    Ok(results.into_iter().map(|m| m.into()).collect())
}

#[async_trait]
impl IngredientRepository for PostgresIngredientRepository {
    async fn create(&self, ingredient: &NewIngredient) -> Result<Ingredient, DomainError> {
        let model = ingredients::ActiveModel {
            name: Set(ingredient.name.clone()),
            price: Set(ingredient.price),
            quantity: Set(ingredient.quantity),
            description: Set(ingredient.description.clone()),
            recipe_id: Set(ingredient.recipe_id.0),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_error(e, INGREDIENT_EXISTS, RECIPE_NOT_FOUND))?;

        Ok(result.into())
    }

    async fn fetch_by_id(&self, id: IngredientId) -> Result<Option<Ingredient>, DomainError> {
        let result = ingredients::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(database_error)?;

        Ok(result.map(|m| m.into()))
    }

    async fn fetch_by_name(&self, name: &str) -> Result<Option<Ingredient>, DomainError> {
        let result = ingredients::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(ingredients::Column::Name)))
                    .eq(Func::lower(Expr::val(name))),
            )
            .order_by_asc(ingredients::Column::Id)
            .one(&self.db)
            .await
            .map_err(database_error)?;

        Ok(result.map(|m| m.into()))
    }

    async fn fetch_all(&self, offset: u64, limit: u64) -> Result<Vec<Ingredient>, DomainError> {
        let results = ingredients::Entity::find()
            .order_by_asc(ingredients::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(database_error)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, ingredient: &Ingredient) -> Result<Ingredient, DomainError> {
        let result = ingredients::ActiveModel {
            id: Set(ingredient.id.0),
            name: Set(ingredient.name.clone()),
            price: Set(ingredient.price),
            quantity: Set(ingredient.quantity),
            description: Set(ingredient.description.clone()),
            recipe_id: Set(ingredient.recipe_id.0),
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => DomainError::NotFound(INGREDIENT_NOT_FOUND.to_string()),
            e => map_write_error(e, INGREDIENT_EXISTS, RECIPE_NOT_FOUND),
        })?;

        Ok(result.into())
    }

    async fn delete(&self, id: IngredientId) -> Result<(), DomainError> {
        let result = ingredients::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(database_error)?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(INGREDIENT_NOT_FOUND.to_string()))
        } else {
            Ok(())
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<ingredients::Model> for Ingredient {
    fn from(model: ingredients::Model) -> Self {
        Ingredient {
            id: IngredientId(model.id),
            name: model.name,
            price: model.price,
            quantity: model.quantity,
            description: model.description,
            recipe_id: RecipeId(model.recipe_id),
        }
    }
}
