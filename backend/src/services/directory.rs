//! Public consultant directory.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::database::models::ConsultantListingRow;
use crate::database::queries;
use crate::errors::ApiResult;

/// The owner fields a listing exposes. Password and balance stay private.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultantUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultantListing {
    pub id: i64,
    pub user_id: i64,
    pub specialization: Option<String>,
    pub bio: Option<String>,
    pub created_at: NaiveDateTime,
    pub user: ConsultantUser,
}

impl From<ConsultantListingRow> for ConsultantListing {
    fn from(row: ConsultantListingRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            specialization: row.specialization,
            bio: row.bio,
            created_at: row.created_at,
            user: ConsultantUser {
                name: row.name,
                email: row.email,
            },
        }
    }
}

#[derive(Clone)]
pub struct DirectoryService {
    pool: SqlitePool,
}

impl DirectoryService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_consultants(&self) -> ApiResult<Vec<ConsultantListing>> {
        let rows = queries::list_consultants(&self.pool).await?;
        Ok(rows.into_iter().map(ConsultantListing::from).collect())
    }
}
