//! Module for database connection setup and common utilities.
//!
//! This module is responsible for initializing the SQLite connection pool
//! and creating the schema the services rely on.

pub mod models;
pub mod queries;

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

pub const CREATE_TABLES_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        role TEXT NOT NULL CHECK (role IN ('client', 'consultant', 'admin')),
        balance_cents INTEGER NOT NULL DEFAULT 0 CHECK (typeof(balance_cents) = 'integer'),
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    );

    CREATE TABLE IF NOT EXISTS consultants (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL UNIQUE REFERENCES users(id),
        specialization TEXT,
        bio TEXT,
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    );

    CREATE TABLE IF NOT EXISTS sessions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        client_id INTEGER NOT NULL REFERENCES users(id),
        consultant_id INTEGER NOT NULL REFERENCES users(id),
        total_fee_cents INTEGER NOT NULL,
        admin_fee_cents INTEGER NOT NULL,
        consultant_earning_cents INTEGER NOT NULL,
        status TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        CHECK (admin_fee_cents + consultant_earning_cents = total_fee_cents)
    );

    CREATE INDEX IF NOT EXISTS idx_sessions_consultant ON sessions(consultant_id);
"#;

/// Opens a pool for `url` and makes sure the schema exists.
///
/// An in-memory URL gets a single long-lived connection, since every new
/// SQLite memory connection would otherwise see its own empty database.
pub async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(30));

    let pool = if url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?
    };

    initialize(&pool).await?;
    info!(url, "database ready");
    Ok(pool)
}

pub async fn initialize(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(CREATE_TABLES_SQL).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn schema_creation_is_idempotent() {
        let pool = connect("sqlite::memory:").await.unwrap();
        initialize(&pool).await.unwrap();

        let tables: Vec<(String,)> =
            sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('users', 'consultants', 'sessions') ORDER BY name")
                .fetch_all(&pool)
                .await
                .unwrap();
        let names: Vec<_> = tables.into_iter().map(|(n,)| n).collect();
        assert_eq!(names, vec!["consultants", "sessions", "users"]);
    }

    #[tokio::test]
    async fn balance_cannot_overflow_into_a_real() {
        let pool = connect("sqlite::memory:").await.unwrap();
        sqlx::query("INSERT INTO users (name, email, password, role, balance_cents) VALUES ('c', 'c@x.io', 'h', 'consultant', 9223372036854775000)")
            .execute(&pool)
            .await
            .unwrap();

        let overflow = super::queries::credit_consultant_balance(&pool, 1, 10_000).await;
        assert!(overflow.is_err());

        let (balance,): (i64,) = sqlx::query_as("SELECT balance_cents FROM users WHERE id = 1")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(balance, 9_223_372_036_854_775_000);
    }

    #[tokio::test]
    async fn unbalanced_split_violates_the_check() {
        let pool = connect("sqlite::memory:").await.unwrap();
        sqlx::query("INSERT INTO users (name, email, password, role) VALUES ('a', 'a@x.io', 'h', 'client')")
            .execute(&pool)
            .await
            .unwrap();

        let result = sqlx::query(
            "INSERT INTO sessions (client_id, consultant_id, total_fee_cents, admin_fee_cents, consultant_earning_cents, status) VALUES (1, 1, 100, 10, 80, 'completed')",
        )
        .execute(&pool)
        .await;
        assert!(result.is_err());
    }
}
