//! Error types for the Holocron server application.
//!
//! Domain errors (`ApiError`) carry the HTTP status they map to; configuration and database
//! errors are aggregated into [`Error`] and reported as internal server errors. All errors
//! implement `IntoResponse` so controllers can return `Result<_, Error>` and use `?`.

/// Request errors with a dedicated HTTP status
pub mod api;
/// Configuration errors
pub mod config;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use validator::ValidationErrors;

use crate::{
    model::api::ErrorDto,
    server::error::{api::ApiError, config::ConfigError},
};

/// Main error type for the Holocron server application.
///
/// # Error Categories
/// - Request errors with a dedicated status (validation, conflict, not found, not implemented)
/// - Configuration errors (invalid environment variables)
/// - Database errors (query failures, connection issues, constraint violations)
#[derive(Error, Debug)]
pub enum Error {
    /// Request error with a dedicated HTTP status.
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] DbErr),
    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Reports a unique constraint violation as [`ApiError::Conflict`] with the provided message
    pub fn conflict_on_unique(err: DbErr, message: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                ApiError::Conflict(message.to_string()).into()
            }
            _ => Self::DbErr(err),
        }
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Self::ApiError(errors.into())
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::ApiError(ApiError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Self::ApiError(ApiError::Validation(rejection.body_text()))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures and duplicate unique values
/// - 404 Not Found - Unknown record IDs
/// - 501 Not Implemented - Placeholder endpoints
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ApiError(err) => err.into_response(),
            Self::ConfigError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
