//! Ingredient handlers
//!
//! CRUD endpoints under `/ingredients`.

use axum::{extract::State, http::StatusCode, Json};

use super::extract::{IdPath, ValidJson, ValidQuery};
use crate::domain::entities::IngredientId;
use crate::error::AppError;
use crate::schemas::{
    IngredientCreate, IngredientResponse, IngredientUpdate, ListQuery, MessageResponse,
};
use crate::AppState;

/// POST /ingredients
pub async fn create_ingredient(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<IngredientCreate>,
) -> Result<(StatusCode, Json<IngredientResponse>), AppError> {
    let ingredient = state.ingredient_service.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(ingredient.into())))
}

/// GET /ingredients
///
/// `?name=` matches regardless of case.
pub async fn list_ingredients(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ListQuery>,
) -> Result<Json<Vec<IngredientResponse>>, AppError> {
    let ingredients = state
        .ingredient_service
        .list(query.name_filter(), query.offset, query.limit)
        .await?;

    Ok(Json(ingredients.into_iter().map(Into::into).collect()))
}

/// GET /ingredients/:id
pub async fn get_ingredient(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<IngredientResponse>, AppError> {
    let ingredient = state.ingredient_service.get(IngredientId(id)).await?;
    Ok(Json(ingredient.into()))
}

/// PUT /ingredients/:id
pub async fn update_ingredient(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(request): ValidJson<IngredientUpdate>,
) -> Result<Json<IngredientResponse>, AppError> {
    let ingredient = state
        .ingredient_service
        .update(IngredientId(id), |current| request.apply(current))
        .await?;
    Ok(Json(ingredient.into()))
}

/// DELETE /ingredients/:id
pub async fn delete_ingredient(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<MessageResponse>, AppError> {
    state.ingredient_service.delete(IngredientId(id)).await?;
    Ok(Json(MessageResponse::new("Ingredient deleted successfully!")))
}
