//! Utilities shared by the controllers.

pub mod extract;
