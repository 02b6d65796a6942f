use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{CreatedDto, ErrorDto, MessageDto},
        planet::{CreatePlanetDto, PlanetDto, UpdatePlanetDto},
    },
    server::{
        controller::util::extract::{AppJson, AppPath},
        error::Error,
        model::app::AppState,
        service::planet::PlanetService,
    },
};

/// OpenAPI tag for planet routes
pub static PLANET_TAG: &str = "planet";

/// List all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when listing planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planet_service = PlanetService::new(&state.db);

    let planets = planet_service.get_all_planets().await?;

    Ok((StatusCode::OK, axum::Json(planets)).into_response())
}

/// Get a planet by ID
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Success when retrieving planet", body = PlanetDto),
        (status = 400, description = "Invalid planet ID", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    AppPath(planet_id): AppPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet_service = PlanetService::new(&state.db);

    let planet = planet_service.get_planet(planet_id).await?;

    Ok((StatusCode::OK, axum::Json(planet)).into_response())
}

/// Create a planet
#[utoipa::path(
    post,
    path = "/planets",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 201, description = "Planet created", body = CreatedDto),
        (status = 400, description = "Missing field or duplicate name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreatePlanetDto>,
) -> Result<impl IntoResponse, Error> {
    let planet_service = PlanetService::new(&state.db);

    let planet_id = planet_service.create_planet(payload).await?;

    tracing::info!(id = %planet_id, "Created planet");

    Ok((
        StatusCode::CREATED,
        axum::Json(CreatedDto {
            msg: "Planet created successfully".to_string(),
            id: planet_id,
        }),
    )
        .into_response())
}

/// Update the provided fields of a planet
#[utoipa::path(
    put,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    request_body = UpdatePlanetDto,
    responses(
        (status = 200, description = "Planet updated", body = MessageDto),
        (status = 400, description = "Name cleared or duplicate name", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_planet(
    State(state): State<AppState>,
    AppPath(planet_id): AppPath<i32>,
    AppJson(payload): AppJson<UpdatePlanetDto>,
) -> Result<impl IntoResponse, Error> {
    let planet_service = PlanetService::new(&state.db);

    planet_service.update_planet(planet_id, payload).await?;

    Ok((
        StatusCode::OK,
        axum::Json(MessageDto {
            msg: "Planet updated successfully".to_string(),
        }),
    )
        .into_response())
}

/// Delete a planet
#[utoipa::path(
    delete,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet deleted", body = MessageDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    AppPath(planet_id): AppPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet_service = PlanetService::new(&state.db);

    planet_service.delete_planet(planet_id).await?;

    tracing::info!(id = %planet_id, "Deleted planet");

    Ok((
        StatusCode::OK,
        axum::Json(MessageDto {
            msg: "Planet deleted successfully".to_string(),
        }),
    )
        .into_response())
}
