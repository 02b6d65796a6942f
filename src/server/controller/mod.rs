//! HTTP controller endpoints for the Holocron web API.
//!
//! Axum handlers extract the request, call a service and build the status code and JSON
//! body. Every handler is annotated with `utoipa::path` so the router can assemble the
//! OpenAPI document.

/// `/characters` and `/people` endpoints
pub mod character;
/// `/comments` endpoint
pub mod comment;
/// `/favorites` endpoints
pub mod favorite;
/// `/planets` endpoints
pub mod planet;
pub mod sitemap;
/// `/users` endpoints
pub mod user;
pub mod util;
