//! Fixture helpers for inserting rows while a test runs.
//!
//! Each submodule adds an accessor on [`TestContext`](crate::TestContext) returning a small
//! fixture struct scoped to one table:
//!
//! - `user` - user accounts
//! - `character` - characters
//! - `planet` - planets
//! - `favorite` - favorites linking users to characters/planets
//! - `comment` - comments by users, optionally about a character/planet

pub mod character;
pub mod comment;
pub mod favorite;
pub mod planet;
pub mod user;
