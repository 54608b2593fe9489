//! Handler functions for the booking API.
//!
//! The role guard has already verified the caller is a client by the time
//! these run; the principal comes from the request extensions.

use axum::extract::State;
use axum::{Extension, Json};

use crate::auth::Principal;
use crate::api::extract::JsonBody;
use crate::errors::ApiResult;
use crate::services::booking::{BookRequest, SessionResponse};
use crate::state::AppState;

pub async fn book_session(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    JsonBody(request): JsonBody<BookRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let session = state.bookings.book(principal, request).await?;
    Ok(Json(session.into()))
}
