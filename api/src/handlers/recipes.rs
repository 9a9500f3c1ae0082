//! Recipe handlers
//!
//! CRUD endpoints under `/recipes`.

use axum::{extract::State, http::StatusCode, Json};

use super::extract::{IdPath, ValidJson, ValidQuery};
use crate::domain::entities::RecipeId;
use crate::error::AppError;
use crate::schemas::{ListQuery, MessageResponse, RecipeCreate, RecipeResponse, RecipeUpdate};
use crate::AppState;

/// POST /recipes
pub async fn create_recipe(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<RecipeCreate>,
) -> Result<(StatusCode, Json<RecipeResponse>), AppError> {
    let recipe = state.recipe_service.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(recipe.into())))
}

/// GET /recipes
///
/// Pages through recipes, or returns the single recipe named by `?name=`.
pub async fn list_recipes(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ListQuery>,
) -> Result<Json<Vec<RecipeResponse>>, AppError> {
    let recipes = state
        .recipe_service
        .list(query.name_filter(), query.offset, query.limit)
        .await?;

    Ok(Json(recipes.into_iter().map(Into::into).collect()))
}

/// GET /recipes/:id
pub async fn get_recipe(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<RecipeResponse>, AppError> {
    let recipe = state.recipe_service.get(RecipeId(id)).await?;
    Ok(Json(recipe.into()))
}

/// PUT /recipes/:id
pub async fn update_recipe(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(request): ValidJson<RecipeUpdate>,
) -> Result<Json<RecipeResponse>, AppError> {
    let recipe = state
        .recipe_service
        .update(RecipeId(id), |current| request.apply(current))
        .await?;
    Ok(Json(recipe.into()))
}

/// DELETE /recipes/:id
///
/// Removes the recipe together with its ingredients.
pub async fn delete_recipe(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<MessageResponse>, AppError> {
    state.recipe_service.delete(RecipeId(id)).await?;
    Ok(Json(MessageResponse::new("Recipe deleted successfully!")))
}
