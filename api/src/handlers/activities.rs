//! Activity suggestion handler

use axum::{extract::State, Json};

use crate::domain::ports::Activity;
use crate::error::AppError;
use crate::AppState;

/// GET /activities/
///
/// Proxies one random activity from the upstream activity API.
pub async fn get_activity(State(state): State<AppState>) -> Result<Json<Activity>, AppError> {
    let activity = state.activity_client.random_activity().await?;
    tracing::debug!(key = %activity.key, "Fetched activity");
    Ok(Json(activity))
}
