//! Unified error types for the Catalog API
//!
//! This module defines error types for each layer:
//! - `ConfigError`: Startup configuration errors
//! - `DomainError`: Data-access errors raised behind the repository port
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Configuration errors, fatal at process start
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} is invalid: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Domain layer errors - failures reaching or reading the catalog store
#[derive(Debug, Error)]
pub enum DomainError {
    /// Store unreachable or no connection available in time
    #[error("Connectivity error: {0}")]
    Connectivity(String),

    /// A row was missing a column or held a value of the wrong type
    #[error("Data shape error: {0}")]
    DataShape(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Domain(e) => {
                tracing::error!("Catalog store error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: "Internal server error".to_string(),
        });

        (status, body).into_response()
    }
}
