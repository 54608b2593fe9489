//! Central module for organizing the application's main API endpoints.
//!
//! This module assembles the full router: liveness, authentication, the
//! consultant directory, booking and balance routes, wrapped in the shared
//! logging and CORS layers.

pub mod booking;
pub mod consultants;
pub mod extract;
pub mod user;

use axum::{middleware, routing::get, Router};

use crate::auth::auth_router;
use crate::middleware::{cors, log_requests};
use crate::state::AppState;

pub const LIVENESS_MESSAGE: &str = "API is running...";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .merge(auth_router())
        .merge(consultants::routes::consultants_router())
        .merge(booking::routes::booking_router(&state))
        .merge(user::routes::user_router(&state))
        .layer(middleware::from_fn(log_requests))
        .layer(cors())
        .with_state(state)
}

async fn root_handler() -> &'static str {
    LIVENESS_MESSAGE
}
