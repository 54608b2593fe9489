//! Handler functions for listing consultants.

use axum::extract::State;
use axum::Json;

use crate::errors::ApiResult;
use crate::services::directory::ConsultantListing;
use crate::state::AppState;

pub async fn list_consultants(State(state): State<AppState>) -> ApiResult<Json<Vec<ConsultantListing>>> {
    Ok(Json(state.directory.list_consultants().await?))
}
