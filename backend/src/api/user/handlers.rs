//! Handler functions for user-specific API endpoints.
//!
//! These functions read the verified principal and return data that belongs to
//! that user only.

use axum::extract::State;
use axum::{Extension, Json};

use crate::auth::Principal;
use crate::errors::ApiResult;
use crate::services::balance::BalanceResponse;
use crate::state::AppState;

pub async fn get_balance(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> ApiResult<Json<BalanceResponse>> {
    let balance = state.balances.balance_of(principal).await?;
    Ok(Json(BalanceResponse { balance }))
}
