//! Generic error handler
//!
//! Errors without a dedicated status leave an [`UnhandledError`] marker on
//! their response. This middleware replaces such responses with
//! `400 {"message": "Failed to execute: <METHOD>: <URL>. Detail: <error>"}`.

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::UnhandledError;

#[derive(Serialize)]
struct GenericErrorResponse {
    message: String,
}

pub async fn error_context_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let url = request_url(&request);

    let response = next.run(request).await;

    match response.extensions().get::<UnhandledError>().cloned() {
        Some(UnhandledError(detail)) => {
            tracing::warn!(%method, %url, error = %detail, "Request failed");
            let message = format!("Failed to execute: {}: {}. Detail: {}", method, url, detail);
            (
                StatusCode::BAD_REQUEST,
                Json(GenericErrorResponse { message }),
            )
                .into_response()
        }
        None => response,
    }
}

/// Absolute URL of the request when a Host header is present
fn request_url(request: &Request) -> String {
    let uri = request.uri();
    if uri.scheme().is_some() {
        return uri.to_string();
    }

    match request
        .headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
    {
        Some(host) => format!("http://{}{}", host, uri),
        None => uri.to_string(),
    }
}
