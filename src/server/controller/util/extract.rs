//! Extractors that report rejections as [`Error`] so clients receive the `{error}` body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::Error;

/// JSON request body, malformed or non-JSON bodies are a 400
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct AppJson<T>(pub T);

/// Path parameters, values that fail to parse are a 400
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct AppPath<T>(pub T);
