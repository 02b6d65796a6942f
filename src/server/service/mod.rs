//! Service layer for business logic.
//!
//! Services validate request payloads, call the repositories and translate missing rows and
//! unique constraint violations into [`ApiError`](crate::server::error::api::ApiError)s.
//! Controllers construct a service per request from the shared database connection.

/// Character listing, retrieval and partial updates
pub mod character;
/// Comment creation
pub mod comment;
/// Favorite creation and removal
pub mod favorite;
/// Planet listing, retrieval and partial updates
pub mod planet;
/// User registration and listing
pub mod user;

use crate::server::error::api::ApiError;

/// Collects the columns of a partial update that may not be cleared
///
/// A required column may be left out of an update, but an explicit `null` or an empty string
/// is rejected. Offending fields are gathered so a single error lists all of them.
#[derive(Default)]
pub(crate) struct RequiredChanges {
    invalid: Vec<&'static str>,
}

impl RequiredChanges {
    /// Accepts an absent or non-empty string, recording `field` otherwise
    pub(crate) fn string(
        &mut self,
        field: &'static str,
        value: Option<Option<String>>,
    ) -> Option<String> {
        match value {
            None => None,
            Some(Some(value)) if !value.is_empty() => Some(value),
            Some(_) => {
                self.invalid.push(field);
                None
            }
        }
    }

    /// Accepts an absent or non-null value, recording `field` otherwise
    pub(crate) fn value<T>(&mut self, field: &'static str, value: Option<Option<T>>) -> Option<T> {
        match value {
            None => None,
            Some(Some(value)) => Some(value),
            Some(None) => {
                self.invalid.push(field);
                None
            }
        }
    }

    pub(crate) fn finish(mut self) -> Result<(), ApiError> {
        if self.invalid.is_empty() {
            return Ok(());
        }

        self.invalid.sort_unstable();

        Err(ApiError::Validation(format!(
            "Missing or empty required fields: {}",
            self.invalid.join(", ")
        )))
    }
}
