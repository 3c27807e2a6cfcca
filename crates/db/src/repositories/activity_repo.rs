//! Repository for the `activity_log` table.

use sqlx::PgPool;

use crate::models::activity::{ActivityLogEntry, CreateActivityLog};

/// Column list for `activity_log` SELECT queries.
const COLUMNS: &str = "id, sample_id, action, details, timestamp";

/// Provides append and per-sample read operations for activity entries.
pub struct ActivityLogRepo;

impl ActivityLogRepo {
    /// Append an activity entry. The timestamp is store-assigned.
    pub async fn insert(
        pool: &PgPool,
        dto: &CreateActivityLog,
    ) -> Result<ActivityLogEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO activity_log (sample_id, action, details) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ActivityLogEntry>(&query)
            .bind(&dto.sample_id)
            .bind(&dto.action)
            .bind(&dto.details)
            .fetch_one(pool)
            .await
    }

    /// Entries for one sample in non-decreasing timestamp order, with the
    /// insertion id as tiebreak.
    pub async fn list_for_sample(
        pool: &PgPool,
        sample_id: &str,
    ) -> Result<Vec<ActivityLogEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activity_log \
             WHERE sample_id = $1 \
             ORDER BY timestamp ASC, id ASC"
        );
        sqlx::query_as::<_, ActivityLogEntry>(&query)
            .bind(sample_id)
            .fetch_all(pool)
            .await
    }
}
