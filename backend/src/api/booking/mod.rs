//! Module for the session booking API.
//!
//! Clients book a consultant here; the commission split and balance credit
//! happen in [`BookingService`](crate::services::BookingService).

pub mod handlers;
pub mod routes;
