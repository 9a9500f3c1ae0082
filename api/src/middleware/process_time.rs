//! Request timing middleware

use std::time::Instant;

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};

pub const PROCESS_TIME_HEADER: &str = "x-process-time";

/// Adds `X-Process-Time: <seconds> sec` to the response
pub async fn process_time_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let mut response = next.run(request).await;

    let value = format_process_time(start.elapsed().as_secs_f64());
    if let Ok(value) = HeaderValue::from_str(&value) {
        response.headers_mut().insert(PROCESS_TIME_HEADER, value);
    }

    response
}

fn format_process_time(seconds: f64) -> String {
    format!("{:.4} sec", seconds)
}
