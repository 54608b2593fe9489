//! Request extractors that report failures in the API's JSON error shape.

use axum::extract::FromRequest;

use crate::errors::ApiError;

/// `axum::Json`, but a malformed body becomes an [`ApiError`] response.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
