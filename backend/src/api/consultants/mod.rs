//! Module for the public consultant directory API.

pub mod handlers;
pub mod routes;
