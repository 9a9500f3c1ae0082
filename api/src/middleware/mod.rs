//! HTTP middleware
//!
//! - `process_time`: `X-Process-Time` header on every response
//! - `request_id`: `X-Request-Id` header and a tracing span per request
//! - `error_context`: generic body for errors without a dedicated status

pub mod error_context;
pub mod process_time;
pub mod request_id;

pub use error_context::error_context_middleware;
pub use process_time::process_time_middleware;
pub use request_id::request_id_middleware;
