//! Defines the HTTP routes for the consultant directory. No auth required.

use axum::{routing::get, Router};

use super::handlers::list_consultants;
use crate::state::AppState;

pub fn consultants_router() -> Router<AppState> {
    Router::new().route("/consultants", get(list_consultants))
}
