//! Database query functions (Data Access Objects).
//!
//! This module centralizes all direct database operations. Every function takes
//! an executor so callers can run it against the pool or inside a transaction.

use sqlx::SqliteExecutor;

use super::models::{ConsultantListingRow, NewSession, NewUser, SessionRow, UserRow};

pub async fn insert_user<'e, E>(executor: E, user: &NewUser<'_>) -> Result<UserRow, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (name, email, password, role, balance_cents)
        VALUES (?, ?, ?, ?, 0)
        RETURNING id, name, email, password, role, balance_cents, created_at
        "#,
    )
    .bind(user.name)
    .bind(user.email)
    .bind(user.password_hash)
    .bind(user.role)
    .fetch_one(executor)
    .await
}

pub async fn insert_consultant_profile<'e, E>(
    executor: E,
    user_id: i64,
    specialization: Option<&str>,
    bio: Option<&str>,
) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO consultants (user_id, specialization, bio) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(user_id)
    .bind(specialization)
    .bind(bio)
    .fetch_one(executor)
    .await?;
    Ok(id)
}

pub async fn find_user_by_email<'e, E>(executor: E, email: &str) -> Result<Option<UserRow>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, UserRow>(
        "SELECT id, name, email, password, role, balance_cents, created_at FROM users WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(executor)
    .await
}

pub async fn find_user_by_id<'e, E>(executor: E, id: i64) -> Result<Option<UserRow>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, UserRow>(
        "SELECT id, name, email, password, role, balance_cents, created_at FROM users WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list_consultants<'e, E>(executor: E) -> Result<Vec<ConsultantListingRow>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, ConsultantListingRow>(
        r#"
        SELECT c.id, c.user_id, c.specialization, c.bio, c.created_at, u.name, u.email
        FROM consultants c
        JOIN users u ON u.id = c.user_id
        ORDER BY c.id
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn insert_session<'e, E>(executor: E, session: &NewSession) -> Result<SessionRow, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, SessionRow>(
        r#"
        INSERT INTO sessions
            (client_id, consultant_id, total_fee_cents, admin_fee_cents, consultant_earning_cents, status)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, client_id, consultant_id, total_fee_cents, admin_fee_cents,
                  consultant_earning_cents, status, created_at
        "#,
    )
    .bind(session.client_id)
    .bind(session.consultant_id)
    .bind(session.total_fee_cents)
    .bind(session.admin_fee_cents)
    .bind(session.consultant_earning_cents)
    .bind(session.status)
    .fetch_one(executor)
    .await
}

/// Adds `cents` to a consultant's balance. Returns the number of rows touched,
/// which is zero when `user_id` is missing or not a consultant.
pub async fn credit_consultant_balance<'e, E>(
    executor: E,
    user_id: i64,
    cents: i64,
) -> Result<u64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        "UPDATE users SET balance_cents = balance_cents + ? WHERE id = ? AND role = 'consultant'",
    )
    .bind(cents)
    .bind(user_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}
