//! Error handling module for the Recipe Browser core.
//!
//! Provides centralized error types with stable error codes for the frontend.

use serde::{Deserialize, Serialize};

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const FETCH_FAILED: &str = "FETCH_FAILED";
    pub const SEARCH_FAILED: &str = "SEARCH_FAILED";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
    pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Catalog fetch failed (network, non-2xx or malformed payload)
    FetchFailed(String),
    /// Catalog search failed (network, non-2xx or malformed payload)
    SearchFailed(String),
    /// Validation error
    Validation(String),
    /// Session persistence error
    Database(String),
    /// Serialization error
    Serialization(String),
}

impl AppError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::FetchFailed(_) => codes::FETCH_FAILED,
            AppError::SearchFailed(_) => codes::SEARCH_FAILED,
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::Database(_) => codes::DATABASE_ERROR,
            AppError::Serialization(_) => codes::SERIALIZATION_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::FetchFailed(msg) => msg.clone(),
            AppError::SearchFailed(msg) => msg.clone(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Database(msg) => msg.clone(),
            AppError::Serialization(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AppError::Database(format!("Database error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::Serialization(format!("JSON error: {}", err))
    }
}

/// Error details in the envelope handed to the frontend.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl From<&AppError> for ErrorDetails {
    fn from(error: &AppError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.message(),
        }
    }
}
