use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::model::api::ErrorDto;

/// Request error reported to the client as `{error}` with a matching status
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing, empty or malformed input (400)
    #[error("{0}")]
    Validation(String),
    /// A unique value is already taken (400)
    #[error("{0}")]
    Conflict(String),
    /// No row with the requested ID (404)
    #[error("{0}")]
    NotFound(String),
    /// Endpoint requires a feature the server does not provide (501)
    #[error("{0}")]
    NotImplemented(String),
}

impl ApiError {
    /// HTTP status the error is reported with
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
        }
    }
}

/// Lists the offending fields, struct level errors contribute their message instead
impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Vec::new();
        let mut messages = Vec::new();

        for (field, field_errors) in errors.field_errors() {
            if field == "__all__" {
                messages.extend(
                    field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string())),
                );
            } else {
                fields.push(field.to_string());
            }
        }

        fields.sort();

        if !fields.is_empty() {
            messages.insert(
                0,
                format!("Missing or empty required fields: {}", fields.join(", ")),
            );
        }

        Self::Validation(messages.join("; "))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        tracing::debug!(status = %status, "{}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
