//! Activity client port trait
//!
//! Defines the interface for fetching a random activity suggestion.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ActivityError;

/// A random activity as returned by the activity API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub activity: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub participants: i32,
    pub price: f64,
    pub link: String,
    pub key: String,
    pub accessibility: f64,
}

/// Client for the external activity API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityClient: Send + Sync {
    /// Fetch one random activity
    async fn random_activity(&self) -> Result<Activity, ActivityError>;
}
