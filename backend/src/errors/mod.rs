//! Global application error types and handlers.
//!
//! This module defines the error type returned by every handler and service,
//! and turns it into a consistent `{"error": ...}` JSON response.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::auth::AuthError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
    #[error("Invalid fee")]
    InvalidFee,
    #[error("Consultant not found")]
    ConsultantNotFound,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),
    #[error("token issue failed: {0}")]
    TokenIssue(#[from] jsonwebtoken::errors::Error),
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Auth(err) => err.status(),
            ApiError::InvalidBody(rejection) => rejection.status(),
            ApiError::InvalidFee => StatusCode::BAD_REQUEST,
            ApiError::ConsultantNotFound | ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_)
            | ApiError::Hashing(_)
            | ApiError::TokenIssue(_)
            | ApiError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_failures_keep_their_status() {
        assert_eq!(ApiError::from(AuthError::Unauthorized).status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::from(AuthError::InvalidToken).status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::from(AuthError::Forbidden).status(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::from(AuthError::DuplicateEmail).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_failures_are_opaque() {
        let err = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn messages_match_the_wire_format() {
        assert_eq!(ApiError::from(AuthError::InvalidCredentials).to_string(), "Invalid credentials");
        assert_eq!(ApiError::NotFound("User").to_string(), "User not found");
    }
}
