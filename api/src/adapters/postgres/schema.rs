//! Table bootstrap
//!
//! Creates the tables from the SeaORM entities when they do not exist yet.
//! Ingredient names also get a unique index on `lower(name)`, which the
//! entity derive cannot express.

use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};

use super::database_error;
use crate::entity::{ingredients, recipes};
use crate::error::DomainError;

const INGREDIENT_NAME_LOWER_INDEX: &str = "CREATE UNIQUE INDEX IF NOT EXISTS \
     idx_ingredients_name_lower ON ingredients (lower(name))";

pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    // recipes first: ingredients carries the foreign key
    let tables = [
        schema
            .create_table_from_entity(recipes::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(ingredients::Entity)
            .if_not_exists()
            .to_owned(),
    ];

    for table in &tables {
        db.execute(backend.build(table))
            .await
            .map_err(database_error)?;
    }

    for mut index in schema.create_index_from_entity(ingredients::Entity) {
        index.if_not_exists();
        db.execute(backend.build(&index))
            .await
            .map_err(database_error)?;
    }

    db.execute_unprepared(INGREDIENT_NAME_LOWER_INDEX)
        .await
        .map_err(database_error)?;

    tracing::info!("Database schema ready");
    Ok(())
}
