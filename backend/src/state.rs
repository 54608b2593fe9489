//! Shared application state handed to every handler.

use chrono::Duration;
use sqlx::SqlitePool;

use crate::auth::{AccountService, TokenService};
use crate::config::Config;
use crate::services::{BalanceService, BookingService, DirectoryService};

#[derive(Clone)]
pub struct AppState {
    pub tokens: TokenService,
    pub accounts: AccountService,
    pub directory: DirectoryService,
    pub bookings: BookingService,
    pub balances: BalanceService,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        let tokens = TokenService::new(&config.jwt_secret, Duration::hours(config.token_ttl_hours));
        Self {
            accounts: AccountService::new(pool.clone(), tokens.clone(), config.bcrypt_cost),
            directory: DirectoryService::new(pool.clone()),
            bookings: BookingService::new(pool.clone()),
            balances: BalanceService::new(pool),
            tokens,
        }
    }
}
