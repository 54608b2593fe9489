//! Defines the HTTP routes specifically for authentication.
//!
//! These routes handle user registration and login and are merged into the
//! main Axum router.

use axum::{routing::post, Router};

use super::handlers::{login, register};
use crate::state::AppState;

pub fn auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}
