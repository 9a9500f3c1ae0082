use std::env;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_ACTIVITY_API_URL: &str = "https://www.boredapi.com/api/activity";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    /// Endpoint returning a random activity as JSON
    pub activity_api_url: String,
    pub activity_timeout_secs: u64,
    pub activity_connect_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL"))?,
            database_max_connections: parse_var("DATABASE_MAX_CONNECTIONS", 10)?,
            port: parse_var("PORT", 8080)?,
            activity_api_url: env::var("ACTIVITY_API_URL")
                .unwrap_or_else(|_| DEFAULT_ACTIVITY_API_URL.to_string()),
            activity_timeout_secs: parse_var("ACTIVITY_TIMEOUT_SECS", 5)?,
            activity_connect_timeout_secs: parse_var("ACTIVITY_CONNECT_TIMEOUT_SECS", 3)?,
        })
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}
