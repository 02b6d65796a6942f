//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, verifying status codes and bodies
//! for success and error paths of every endpoint.

mod comment;
mod favorite;
mod planet;
mod user;

use holocron_test_utils::prelude::*;

use crate::util::body_json;
