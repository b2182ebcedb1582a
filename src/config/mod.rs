//! Configuration module for the Recipe Browser core.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;

/// Default base URL of the remote recipe catalog.
pub const DEFAULT_API_BASE_URL: &str = "https://api.spoonacular.com/recipes";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the remote recipe catalog (requests are sent without
    /// credentials when unset)
    pub api_key: Option<String>,
    /// Base URL of the remote recipe catalog
    pub api_base_url: String,
    /// Path to the SQLite file holding the persisted session slot
    pub db_path: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Per-request timeout for catalog calls, in seconds
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_key = env::var("RECIPE_API_KEY").ok();

        let api_base_url =
            env::var("RECIPE_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let db_path = env::var("RECIPE_DB_PATH")
            .unwrap_or_else(|_| "./data/session.sqlite".to_string())
            .into();

        let log_level = env::var("RECIPE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let http_timeout_secs = env::var("RECIPE_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            api_key,
            api_base_url,
            db_path,
            log_level,
            http_timeout_secs,
        }
    }
}
