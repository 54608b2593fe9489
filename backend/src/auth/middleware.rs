//! Middleware for protecting authenticated routes and handling authorization.
//!
//! This module validates bearer tokens, enforces an optional required role and
//! attaches the verified [`Principal`] to the request extensions.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use super::errors::AuthError;
use super::models::{Principal, Role};
use super::service::TokenService;
use crate::errors::ApiError;

/// State for [`authorize`]: the token keys plus the role a route demands.
#[derive(Clone)]
pub struct RoleGuard {
    tokens: TokenService,
    required: Option<Role>,
}

impl RoleGuard {
    pub fn new(tokens: TokenService, required: Option<Role>) -> Self {
        Self { tokens, required }
    }

    pub fn any_role(tokens: TokenService) -> Self {
        Self::new(tokens, None)
    }

    pub fn require(tokens: TokenService, role: Role) -> Self {
        Self::new(tokens, Some(role))
    }

    pub fn check(&self, headers: &HeaderMap) -> Result<Principal, AuthError> {
        let token = bearer_token(headers).ok_or(AuthError::Unauthorized)?;
        let principal = self.tokens.verify(token)?;
        match self.required {
            Some(role) if role != principal.role => {
                debug!(user_id = principal.id, have = %principal.role, need = %role, "role mismatch");
                Err(AuthError::Forbidden)
            }
            _ => Ok(principal),
        }
    }
}

/// Route layer: rejects the request or forwards it with a `Principal` extension.
pub async fn authorize(
    State(guard): State<RoleGuard>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let principal = guard.check(request.headers())?;
    request.extensions_mut().insert(principal);
    Ok(next.run(request).await)
}

/// Takes whatever follows the auth scheme, e.g. `Bearer <token>`.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (_, token) = value.split_once(' ')?;
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
