//! Module for user-specific endpoints.
//!
//! This module handles information tied to the calling user that is distinct
//! from the core authentication process, such as a consultant's balance.

pub mod handlers;
pub mod routes;
