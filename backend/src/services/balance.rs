//! Balance lookup for the calling consultant.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::auth::Principal;
use crate::database::queries;
use crate::errors::{ApiError, ApiResult};
use crate::utils::from_cents;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub balance: Decimal,
}

#[derive(Clone)]
pub struct BalanceService {
    pool: SqlitePool,
}

impl BalanceService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Only the principal's own id is ever used as the lookup key.
    pub async fn balance_of(&self, principal: Principal) -> ApiResult<Decimal> {
        let user = queries::find_user_by_id(&self.pool, principal.id)
            .await?
            .ok_or(ApiError::NotFound("User"))?;
        Ok(from_cents(user.balance_cents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;
    use crate::database::{self, models::NewUser};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn reads_own_balance() {
        let pool = database::connect("sqlite::memory:").await.unwrap();
        let user = queries::insert_user(
            &pool,
            &NewUser {
                name: "Rina",
                email: "rina@example.com",
                password_hash: "h",
                role: Role::Consultant,
            },
        )
        .await
        .unwrap();
        queries::credit_consultant_balance(&pool, user.id, 4_250).await.unwrap();

        let balance = BalanceService::new(pool)
            .balance_of(Principal { id: user.id, role: Role::Consultant })
            .await
            .unwrap();
        assert_eq!(balance, dec!(42.50));
    }

    #[tokio::test]
    async fn vanished_user_is_not_found() {
        let pool = database::connect("sqlite::memory:").await.unwrap();
        let err = BalanceService::new(pool)
            .balance_of(Principal { id: 41, role: Role::Consultant })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound("User")));
    }
}
