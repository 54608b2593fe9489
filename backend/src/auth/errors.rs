//! Custom error types specific to authentication failures.
//!
//! This module defines the errors that can occur while registering, logging in
//! or passing the role guard, along with the HTTP status each one maps to.

use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// No bearer token on the request.
    #[error("Unauthorized")]
    Unauthorized,
    /// Signature or expiry verification failed.
    #[error("Invalid token")]
    InvalidToken,
    /// Token is valid but carries the wrong role.
    #[error("Forbidden")]
    Forbidden,
    #[error("Email already exists")]
    DuplicateEmail,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Invalid role")]
    InvalidRole,
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::Unauthorized | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
            AuthError::DuplicateEmail | AuthError::InvalidCredentials | AuthError::InvalidRole => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}
