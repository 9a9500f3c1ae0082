//! Recipe Book API Server
//!
//! Recipes, their ingredients, and a random activity suggestion proxied from
//! an external API. Uses hexagonal (ports & adapters) architecture for clean
//! separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::{ConnectOptions, Database};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod middleware;
mod schemas;

#[cfg(test)]
mod test_utils;


use adapters::{
    ensure_schema, HttpActivityClient, PostgresIngredientRepository, PostgresRecipeRepository,
};
use app::{IngredientService, RecipeService};
use config::Config;
use domain::ports::ActivityClient;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub recipe_service: Arc<RecipeService>,
    pub ingredient_service: Arc<IngredientService>,
    pub activity_client: Arc<dyn ActivityClient>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the full router with middleware applied
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Recipes
        .route(
            "/recipes",
            get(handlers::list_recipes).post(handlers::create_recipe),
        )
        .route(
            "/recipes/:id",
            get(handlers::get_recipe)
                .put(handlers::update_recipe)
                .delete(handlers::delete_recipe),
        )
        // Ingredients
        .route(
            "/ingredients",
            get(handlers::list_ingredients).post(handlers::create_ingredient),
        )
        .route(
            "/ingredients/:id",
            get(handlers::get_ingredient)
                .put(handlers::update_ingredient)
                .delete(handlers::delete_ingredient),
        )
        // Activities
        .route("/activities/", get(handlers::get_activity))
        // Middleware, innermost first
        .layer(axum::middleware::from_fn(
            middleware::error_context_middleware,
        ))
        .layer(axum::middleware::from_fn(
            middleware::process_time_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,recipebook_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Recipe Book API...");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.database_max_connections)
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    ensure_schema(&db)
        .await
        .context("Failed to create database schema")?;

    // Create adapters
    let recipe_repo = Arc::new(PostgresRecipeRepository::new(db.clone()));
    let ingredient_repo = Arc::new(PostgresIngredientRepository::new(db.clone()));

    let activity_client = Arc::new(
        HttpActivityClient::new(
            config.activity_api_url.clone(),
            Duration::from_secs(config.activity_timeout_secs),
            Duration::from_secs(config.activity_connect_timeout_secs),
        )
        .context("Failed to build activity client")?,
    );

    // Create application services
    let recipe_service = Arc::new(RecipeService::new(recipe_repo.clone()));
    let ingredient_service = Arc::new(IngredientService::new(ingredient_repo, recipe_repo));

    let state = AppState {
        recipe_service,
        ingredient_service,
        activity_client,
    };

    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
