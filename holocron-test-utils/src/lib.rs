//! Test utilities shared by the Holocron unit and integration tests.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables and fixture rows a
//! test needs, and `build()` turns that into a [`TestContext`] backed by an in-memory SQLite
//! database. Fixture helpers on the context (`test.user()`, `test.character()`, ...) insert
//! additional rows while the test runs.

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{factory, TestBuilder, TestContext, TestError};
}
