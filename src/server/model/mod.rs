//! Server application models: the shared application state and database model aliases.

/// Shared application state
pub mod app;
pub mod db;
