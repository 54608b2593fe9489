//! Handler functions for authentication-related API endpoints.
//!
//! These functions parse registration and login bodies and delegate to
//! [`AccountService`](super::service::AccountService) for the actual work.

use axum::extract::State;
use axum::Json;

use super::models::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};
use crate::api::extract::JsonBody;
use crate::errors::ApiResult;
use crate::state::AppState;

pub async fn register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.accounts.register(request).await?;
    Ok(Json(user.into()))
}

pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let token = state.accounts.login(request).await?;
    Ok(Json(TokenResponse { token }))
}
