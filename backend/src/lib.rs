//! Marketplace backend connecting clients with consultants.
//!
//! The crate exposes the Axum router and the services behind it so the binary
//! and the integration tests build the application the same way.

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod middleware;
pub mod services;
pub mod state;
pub mod utils;

pub use api::router;
pub use config::Config;
pub use state::AppState;
