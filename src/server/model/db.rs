//! Database model type aliases.
//!
//! This module provides type aliases for the SeaORM entity models used throughout the
//! server, so repositories and services don't need to spell out the generated `entity`
//! crate paths.

/// Type alias for user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `username` - Unique username
/// - `email` - Unique email address
/// - `password` - Password as submitted at registration
/// - `is_active` - Whether the account is active, `true` on creation
pub type UserModel = entity::user::Model;

/// Type alias for character database model.
pub type CharacterModel = entity::character::Model;

/// Type alias for planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for favorite database model.
///
/// Links a user to a character and/or planet; at least one of `character_id` and
/// `planet_id` is set.
pub type FavoriteModel = entity::favorite::Model;

/// Type alias for comment database model.
///
/// `created_at` is set by the server when the comment is stored and never changes.
pub type CommentModel = entity::comment::Model;
