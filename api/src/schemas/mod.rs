//! Validation/schema layer
//!
//! Request and response shapes for the HTTP API, independent of storage.
//! Request shapes implement [`Validate`]; the extractors in
//! `handlers::extract` run it before a handler sees the value.

pub mod ingredient;
pub mod recipe;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::ports::repositories::DEFAULT_PAGE_LIMIT;
use crate::error::DomainError;

pub use ingredient::{IngredientCreate, IngredientResponse, IngredientUpdate};
pub use recipe::{RecipeCreate, RecipeResponse, RecipeUpdate};

pub const MAX_NAME_LEN: usize = 80;
pub const MAX_DESCRIPTION_LEN: usize = 255;
pub const MAX_PAGE_LIMIT: u64 = 1000;
/// Offsets travel to PostgreSQL as BIGINT
pub const MAX_PAGE_OFFSET: u64 = i64::MAX as u64;

/// Shape-level validation run before any repository call
pub trait Validate {
    fn validate(&self) -> Result<(), DomainError>;
}

/// Query parameters for list endpoints
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub name: Option<String>,
    #[serde(default)]
    pub offset: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_LIMIT
}

impl ListQuery {
    /// The name filter, if one was given and is non-empty
    pub fn name_filter(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

impl Validate for ListQuery {
    /// Paging is ignored when a name filter is given, so only a page is checked
    fn validate(&self) -> Result<(), DomainError> {
        if self.name_filter().is_some() {
            return Ok(());
        }
        if self.offset > MAX_PAGE_OFFSET {
            return Err(DomainError::Validation(format!(
                "offset must be at most {}",
                MAX_PAGE_OFFSET
            )));
        }
        if self.limit == 0 || self.limit > MAX_PAGE_LIMIT {
            return Err(DomainError::Validation(format!(
                "limit must be between 1 and {}",
                MAX_PAGE_LIMIT
            )));
        }
        Ok(())
    }
}

/// Confirmation body for deletes
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Distinguish an absent field (`None`) from an explicit null (`Some(None)`)
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub(crate) fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation(
            "name must not be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(DomainError::Validation(format!(
            "name must be at most {} characters",
            MAX_NAME_LEN
        )));
    }
    Ok(())
}

pub(crate) fn validate_description(description: Option<&str>) -> Result<(), DomainError> {
    match description {
        Some(text) if text.chars().count() > MAX_DESCRIPTION_LEN => {
            Err(DomainError::Validation(format!(
                "description must be at most {} characters",
                MAX_DESCRIPTION_LEN
            )))
        }
        _ => Ok(()),
    }
}
