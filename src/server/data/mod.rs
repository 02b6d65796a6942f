//! Data access layer repositories.
//!
//! Repositories wrap the SeaORM queries for a single table each. They return `Option` for
//! missing rows and [`sea_orm::DeleteResult`] for deletes, leaving the mapping to HTTP errors
//! to the service layer.

/// Character repository
pub mod character;
/// Comment repository
pub mod comment;
/// Favorite repository
pub mod favorite;
/// Planet repository
pub mod planet;
/// User repository
pub mod user;
