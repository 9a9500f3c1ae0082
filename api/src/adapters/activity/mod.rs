//! Activity adapter
//!
//! HTTP implementation of the activity client.

pub mod client;

pub use client::HttpActivityClient;
