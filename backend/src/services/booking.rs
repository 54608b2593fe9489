//! Session booking with automatic commission split.
//!
//! A booking records a completed session and credits the consultant's share
//! to their balance. Both writes happen in a single transaction.

use chrono::NaiveDateTime;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::info;

use crate::auth::Principal;
use crate::database::models::{NewSession, SessionRow};
pub use crate::database::models::SessionStatus;
use crate::database::queries;
use crate::errors::{ApiError, ApiResult};
use crate::utils::{from_cents, to_cents};

/// Platform commission taken from every booking.
pub const ADMIN_FEE_RATE: Decimal = dec!(0.10);

/// Largest fee a single booking may carry.
pub const MAX_TOTAL_FEE: Decimal = dec!(1000000.00);

/// How a total fee is divided between the platform and the consultant, in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommissionSplit {
    pub total_cents: i64,
    pub admin_fee_cents: i64,
    pub consultant_earning_cents: i64,
}

impl CommissionSplit {
    /// Splits a positive fee, up to [`MAX_TOTAL_FEE`], with at most two
    /// decimal places.
    ///
    /// The admin fee is rounded half away from zero to the cent and the
    /// consultant gets the remainder, so the two parts always sum to the total.
    pub fn from_total(total_fee: Decimal) -> ApiResult<Self> {
        if total_fee <= Decimal::ZERO || total_fee > MAX_TOTAL_FEE {
            return Err(ApiError::InvalidFee);
        }
        let total_cents = to_cents(total_fee).ok_or(ApiError::InvalidFee)?;
        let admin_fee_cents = (Decimal::from(total_cents) * ADMIN_FEE_RATE)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .ok_or(ApiError::InvalidFee)?;

        Ok(Self {
            total_cents,
            admin_fee_cents,
            consultant_earning_cents: total_cents - admin_fee_cents,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    pub consultant_id: i64,
    pub total_fee: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub id: i64,
    pub client_id: i64,
    pub consultant_id: i64,
    pub total_fee: Decimal,
    pub admin_fee: Decimal,
    pub consultant_earning: Decimal,
    pub status: SessionStatus,
    pub created_at: NaiveDateTime,
}

impl From<SessionRow> for SessionResponse {
    fn from(row: SessionRow) -> Self {
        Self {
            id: row.id,
            client_id: row.client_id,
            consultant_id: row.consultant_id,
            total_fee: from_cents(row.total_fee_cents),
            admin_fee: from_cents(row.admin_fee_cents),
            consultant_earning: from_cents(row.consultant_earning_cents),
            status: row.status,
            created_at: row.created_at,
        }
    }
}

#[derive(Clone)]
pub struct BookingService {
    pool: SqlitePool,
}

impl BookingService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn book(&self, client: Principal, request: BookRequest) -> ApiResult<SessionRow> {
        let split = CommissionSplit::from_total(request.total_fee)?;

        // A deferred transaction cannot upgrade to a writer under contention.
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let credited = queries::credit_consultant_balance(
            &mut *tx,
            request.consultant_id,
            split.consultant_earning_cents,
        )
        .await?;
        if credited != 1 {
            return Err(ApiError::ConsultantNotFound);
        }

        let session = queries::insert_session(
            &mut *tx,
            &NewSession {
                client_id: client.id,
                consultant_id: request.consultant_id,
                total_fee_cents: split.total_cents,
                admin_fee_cents: split.admin_fee_cents,
                consultant_earning_cents: split.consultant_earning_cents,
                status: SessionStatus::Completed,
            },
        )
        .await?;

        tx.commit().await?;

        info!(
            session_id = session.id,
            client_id = client.id,
            consultant_id = request.consultant_id,
            total_cents = split.total_cents,
            admin_fee_cents = split.admin_fee_cents,
            "session booked"
        );
        Ok(session)
    }
}
