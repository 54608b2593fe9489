//! Authentication module for managing user accounts and access control.
//!
//! This module provides the public interface for registration, login, token
//! management and the role-checking route guard.

pub mod routes;
pub mod handlers;
pub mod models;
pub mod middleware;
pub mod service;
pub mod errors;

// Re-exports for convenience
pub use errors::AuthError;
pub use middleware::{authorize, RoleGuard};
pub use models::{Claims, Principal, Role};
pub use routes::auth_router;
pub use service::{AccountService, TokenService};
