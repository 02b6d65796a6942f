use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{CreatedDto, ErrorDto, MessageDto},
        character::{CharacterDto, CreateCharacterDto, UpdateCharacterDto},
    },
    server::{
        controller::util::extract::{AppJson, AppPath},
        error::Error,
        model::app::AppState,
        service::character::CharacterService,
    },
};

/// OpenAPI tag for character routes
pub static CHARACTER_TAG: &str = "character";

/// List all characters
#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Success when listing characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let character_service = CharacterService::new(&state.db);

    let characters = character_service.get_all_characters().await?;

    Ok((StatusCode::OK, axum::Json(characters)).into_response())
}

/// Get a character by ID
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Success when retrieving character", body = CharacterDto),
        (status = 400, description = "Invalid character ID", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    AppPath(character_id): AppPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let character_service = CharacterService::new(&state.db);

    let character = character_service.get_character(character_id).await?;

    Ok((StatusCode::OK, axum::Json(character)).into_response())
}

/// Create a character
#[utoipa::path(
    post,
    path = "/people",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 201, description = "Character created", body = CreatedDto),
        (status = 400, description = "Missing field, invalid gender or duplicate name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCharacterDto>,
) -> Result<impl IntoResponse, Error> {
    let character_service = CharacterService::new(&state.db);

    let character_id = character_service.create_character(payload).await?;

    tracing::info!(id = %character_id, "Created character");

    Ok((
        StatusCode::CREATED,
        axum::Json(CreatedDto {
            msg: "Character created successfully".to_string(),
            id: character_id,
        }),
    )
        .into_response())
}

/// Update the provided fields of a character
#[utoipa::path(
    put,
    path = "/people/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    request_body = UpdateCharacterDto,
    responses(
        (status = 200, description = "Character updated", body = MessageDto),
        (status = 400, description = "Required field cleared or duplicate name", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_character(
    State(state): State<AppState>,
    AppPath(character_id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateCharacterDto>,
) -> Result<impl IntoResponse, Error> {
    let character_service = CharacterService::new(&state.db);

    character_service
        .update_character(character_id, payload)
        .await?;

    Ok((
        StatusCode::OK,
        axum::Json(MessageDto {
            msg: "Character updated successfully".to_string(),
        }),
    )
        .into_response())
}

/// Delete a character
///
/// Favorites of the character are removed with it, comments keep their text.
#[utoipa::path(
    delete,
    path = "/people/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Character deleted", body = MessageDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    AppPath(character_id): AppPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let character_service = CharacterService::new(&state.db);

    character_service.delete_character(character_id).await?;

    tracing::info!(id = %character_id, "Deleted character");

    Ok((
        StatusCode::OK,
        axum::Json(MessageDto {
            msg: "Character deleted successfully".to_string(),
        }),
    )
        .into_response())
}
