//! Rust structs that represent database table mappings.
//!
//! These rows mirror the `users`, `consultants` and `sessions` tables. Money
//! columns hold integer cents; API-facing shapes live next to their handlers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::auth::Role;

/// Bookings are recorded already settled; there is no other state yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum SessionStatus {
    Completed,
}

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub balance_cents: i64,
    pub created_at: NaiveDateTime,
}

/// A consultant profile joined with its owner's public fields.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ConsultantListingRow {
    pub id: i64,
    pub user_id: i64,
    pub specialization: Option<String>,
    pub bio: Option<String>,
    pub created_at: NaiveDateTime,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct SessionRow {
    pub id: i64,
    pub client_id: i64,
    pub consultant_id: i64,
    pub total_fee_cents: i64,
    pub admin_fee_cents: i64,
    pub consultant_earning_cents: i64,
    pub status: SessionStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Debug)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub role: Role,
}

#[derive(Debug)]
pub struct NewSession {
    pub client_id: i64,
    pub consultant_id: i64,
    pub total_fee_cents: i64,
    pub admin_fee_cents: i64,
    pub consultant_earning_cents: i64,
    pub status: SessionStatus,
}
