use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::CreateFavoriteDto,
    },
    server::{
        controller::util::extract::{AppJson, AppPath},
        error::Error,
        model::app::AppState,
        service::favorite::FavoriteService,
    },
};

/// OpenAPI tag for favorite routes
pub static FAVORITE_TAG: &str = "favorite";

/// Add a character and/or planet to the favorites of a user
#[utoipa::path(
    post,
    path = "/favorites",
    tag = FAVORITE_TAG,
    request_body = CreateFavoriteDto,
    responses(
        (status = 201, description = "Favorite added", body = MessageDto),
        (status = 400, description = "Missing user or favorite target", body = ErrorDto),
        (status = 500, description = "Referenced row missing or internal server error", body = ErrorDto)
    ),
)]
pub async fn create_favorite(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateFavoriteDto>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let favorite_id = favorite_service.create_favorite(payload).await?;

    tracing::info!(id = %favorite_id, "Added favorite");

    Ok((
        StatusCode::CREATED,
        axum::Json(MessageDto {
            msg: "Favorite added".to_string(),
        }),
    )
        .into_response())
}

/// Remove a favorite
#[utoipa::path(
    delete,
    path = "/favorites/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Favorite ID")),
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite(
    State(state): State<AppState>,
    AppPath(favorite_id): AppPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service.delete_favorite(favorite_id).await?;

    tracing::info!(id = %favorite_id, "Removed favorite");

    Ok((
        StatusCode::OK,
        axum::Json(MessageDto {
            msg: "Favorite removed".to_string(),
        }),
    )
        .into_response())
}
