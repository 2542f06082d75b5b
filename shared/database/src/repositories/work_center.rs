//! Work Center Repository
//!
//! Read-only access to work center reference data.

use anyhow::{Context, Result};
use sqlx::{FromRow, PgPool};

use fabrica_models::WorkCenter;

pub struct WorkCenterRepository {
    pool: PgPool,
}

impl WorkCenterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find all work centers
    pub async fn find_all(&self) -> Result<Vec<WorkCenter>> {
        let rows: Vec<WorkCenterRow> = sqlx::query_as(
            r#"
            SELECT id, name
            FROM work_centers
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch all work centers")?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}

#[derive(Debug, FromRow)]
struct WorkCenterRow {
    id: i64,
    name: String,
}

impl From<WorkCenterRow> for WorkCenter {
    fn from(row: WorkCenterRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}
