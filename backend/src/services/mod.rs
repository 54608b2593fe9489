//! Module for core business logic services.
//!
//! This module encapsulates the services behind the marketplace endpoints:
//! the consultant directory, session booking and balance lookup. Each one
//! owns a handle to the shared connection pool.

pub mod balance;
pub mod booking;
pub mod directory;

pub use balance::BalanceService;
pub use booking::BookingService;
pub use directory::DirectoryService;
