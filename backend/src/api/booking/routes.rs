//! Defines the HTTP routes for booking sessions.
//!
//! Every route here sits behind the client-only role guard.

use axum::{middleware, routing::post, Router};

use super::handlers::book_session;
use crate::auth::{authorize, RoleGuard, Role};
use crate::state::AppState;

pub fn booking_router(state: &AppState) -> Router<AppState> {
    let guard = RoleGuard::require(state.tokens.clone(), Role::Client);
    Router::new()
        .route("/book", post(book_session))
        .route_layer(middleware::from_fn_with_state(guard, authorize))
}
