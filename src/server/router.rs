//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here through `utoipa_axum` so its OpenAPI annotation is
//! collected into a single document. Swagger UI is served at `/api/docs` and an HTML
//! sitemap of the same document at `/`.

use axum::{response::Html, routing::get, Router};
use tower::Layer;
use tower_http::{
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{self, sitemap::render_sitemap},
    model::app::AppState,
};

/// Builds the router with all API endpoints, Swagger UI and the sitemap.
///
/// # Registered Endpoints
/// - `GET /users`, `POST /users`, `GET /users/favorites`
/// - `GET /characters`
/// - `POST /people`, `GET|PUT|DELETE /people/{id}`
/// - `GET /planets`, `POST /planets`, `GET|PUT|DELETE /planets/{id}`
/// - `POST /favorites`, `DELETE /favorites/{id}`
/// - `POST /comments`
///
/// The OpenAPI document is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Star Wars characters, planets, favorites and comments"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::character::CHARACTER_TAG, description = "Character API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
        (name = controller::comment::COMMENT_TAG, description = "Comment API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::user::list_users,
            controller::user::create_user
        ))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(controller::character::list_characters))
        .routes(routes!(controller::character::create_character))
        .routes(routes!(
            controller::character::get_character,
            controller::character::update_character,
            controller::character::delete_character
        ))
        .routes(routes!(
            controller::planet::list_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(
            controller::planet::get_planet,
            controller::planet::update_planet,
            controller::planet::delete_planet
        ))
        .routes(routes!(controller::favorite::create_favorite))
        .routes(routes!(controller::favorite::delete_favorite))
        .routes(routes!(controller::comment::create_comment))
        .split_for_parts();

    let sitemap = Html(render_sitemap(&api));

    routes
        .route("/", get(move || async move { sitemap }))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Builds the complete application service
///
/// Adds request tracing and permissive CORS, and strips trailing slashes before routing so
/// `/planets/` reaches the same handler as `/planets`.
pub fn app(state: AppState) -> NormalizePath<Router> {
    let router = routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
