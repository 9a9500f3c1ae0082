//! Unified error types for the Recipe Book API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic and persistence errors
//! - `ActivityError`: Activity API client errors
//! - `AppError`: Application layer errors (wraps the others for HTTP responses)

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Activity API client errors
#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Activity error: {0}")]
    Activity(#[from] ActivityError),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::Domain(DomainError::NotFound(message.into()))
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        AppError::Domain(DomainError::AlreadyExists(message.into()))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Domain(DomainError::Validation(message.into()))
    }
}

/// Marker placed on responses for errors without a dedicated status.
///
/// `middleware::error_context` turns these into the generic
/// `Failed to execute` body, because only the middleware knows the request.
#[derive(Debug, Clone)]
pub struct UnhandledError(pub String);

/// Error response body for typed errors
#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Domain(DomainError::NotFound(msg)) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Domain(DomainError::AlreadyExists(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::Domain(DomainError::Validation(msg)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg.clone())
            }
            AppError::Domain(DomainError::Database(_)) | AppError::Activity(_) => {
                let detail = self.to_string();
                let mut response = (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        detail: detail.clone(),
                    }),
                )
                    .into_response();
                response.extensions_mut().insert(UnhandledError(detail));
                return response;
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::validation(rejection.body_text())
    }
}
