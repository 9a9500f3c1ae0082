//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod ingredient_repo;
pub mod recipe_repo;
pub mod schema;


use sea_orm::{DbErr, SqlErr};

use crate::error::DomainError;

pub use ingredient_repo::PostgresIngredientRepository;
pub use recipe_repo::PostgresRecipeRepository;
pub use schema::ensure_schema;

fn database_error(e: DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

/// Map constraint violations raised by an insert or update to domain errors
fn map_write_error(e: DbErr, duplicate: &str, missing_parent: &str) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DomainError::AlreadyExists(duplicate.to_string())
        }
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            DomainError::NotFound(missing_parent.to_string())
        }
        _ => database_error(e),
    }
}
