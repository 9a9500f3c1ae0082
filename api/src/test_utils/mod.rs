//! Test utilities
//!
//! In-memory repositories and test fixtures for unit testing.
//!
//! Repositories are hand-written in-memory stores; the activity client uses
//! the mockall-generated `MockActivityClient` from `domain::ports::activity`.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
