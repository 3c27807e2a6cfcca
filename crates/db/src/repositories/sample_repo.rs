//! Repository for the `samples` table.

use sqlx::PgPool;

use crate::models::sample::{CreateSample, SampleRow};

/// Column list for `samples` SELECT queries.
const COLUMNS: &str = "id, sample_type, volume_ul, location, expiry_date, created_at";

/// Provides write-once insert and read operations for samples.
pub struct SampleRepo;

impl SampleRepo {
    /// Insert a new sample.
    ///
    /// Returns `None` when a sample with the same id already exists. The
    /// existing record is never overwritten; collisions are the caller's
    /// conflict to report.
    pub async fn insert(
        pool: &PgPool,
        dto: &CreateSample,
    ) -> Result<Option<SampleRow>, sqlx::Error> {
        let query = format!(
            "INSERT INTO samples (id, sample_type, volume_ul, location, expiry_date) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (id) DO NOTHING \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SampleRow>(&query)
            .bind(&dto.id)
            .bind(&dto.sample_type)
            .bind(dto.volume_ul)
            .bind(&dto.location)
            .bind(&dto.expiry_date)
            .fetch_optional(pool)
            .await
    }

    /// Read the full sample collection.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<SampleRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM samples ORDER BY created_at, id");
        sqlx::query_as::<_, SampleRow>(&query).fetch_all(pool).await
    }

    /// Find a sample by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<SampleRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM samples WHERE id = $1");
        sqlx::query_as::<_, SampleRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
