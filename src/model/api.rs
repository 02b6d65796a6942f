use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response of a successful update, delete or create without a returned ID
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    /// Human readable result
    pub msg: String,
}

/// The response of a successful create
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatedDto {
    /// Human readable result
    pub msg: String,
    /// ID of the created record
    pub id: i32,
}
