//! Request and response bodies exchanged over the HTTP API.

pub mod api;
pub mod character;
pub mod comment;
pub mod favorite;
pub mod planet;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Deserializes a field that distinguishes an absent key from an explicit `null`.
///
/// Combined with `#[serde(default)]`: absent → `None`, `null` → `Some(None)`,
/// value → `Some(Some(value))`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
