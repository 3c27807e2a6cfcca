//! Activity log entity models and DTOs.
//!
//! Models for the append-only per-sample activity trail. Entries are
//! immutable once written (no update or delete path exists) and their
//! timestamps are store-assigned so ordering is consistent across clients.

use biotrack_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single activity log entry. Immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActivityLogEntry {
    pub id: i64,
    pub sample_id: String,
    pub action: String,
    pub details: String,
    pub timestamp: Timestamp,
}

/// DTO for appending a new activity log entry. The timestamp is assigned
/// by the store at insert time.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateActivityLog {
    pub sample_id: String,
    pub action: String,
    pub details: String,
}
