//! Defines the HTTP routes for user-specific data, guarded by role.

use axum::{middleware, routing::get, Router};

use super::handlers::get_balance;
use crate::auth::{authorize, RoleGuard, Role};
use crate::state::AppState;

pub fn user_router(state: &AppState) -> Router<AppState> {
    let guard = RoleGuard::require(state.tokens.clone(), Role::Consultant);
    Router::new()
        .route("/balance", get(get_balance))
        .route_layer(middleware::from_fn_with_state(guard, authorize))
}
