use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    model::{
        api::{CreatedDto, ErrorDto},
        user::{CreateUserDto, UserDto},
    },
    server::{
        controller::util::extract::AppJson,
        error::{api::ApiError, Error},
        model::app::AppState,
        service::user::UserService,
    },
};

/// OpenAPI tag for user routes
pub static USER_TAG: &str = "user";

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when listing users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let users = user_service.get_all_users().await?;

    Ok((StatusCode::OK, axum::Json(users)).into_response())
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = CreatedDto),
        (status = 400, description = "Missing field or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let user_id = user_service.create_user(payload).await?;

    tracing::info!(id = %user_id, "Created user");

    Ok((
        StatusCode::CREATED,
        axum::Json(CreatedDto {
            msg: "User created successfully".to_string(),
            id: user_id,
        }),
    )
        .into_response())
}

/// Get the favorites of the logged in user
///
/// Requires authentication, which this server does not provide.
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = USER_TAG,
    responses(
        (status = 501, description = "Authentication is not implemented", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites() -> Result<Response, Error> {
    Err(ApiError::NotImplemented("Authentication is not implemented".to_string()).into())
}
