//! Sample entity models and DTOs.
//!
//! The `samples` table stores the record the way the document arrived:
//! `sample_type` and `expiry_date` stay TEXT and are re-validated on every
//! read via [`SampleRow::into_sample`]. Samples have no update DTO
//! (write-once records).

use biotrack_core::error::CoreError;
use biotrack_core::registration::{NewSample, DATE_FORMAT};
use biotrack_core::sample::{Sample, SampleType};
use biotrack_core::types::Timestamp;
use chrono::NaiveDate;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Sample row
// ---------------------------------------------------------------------------

/// Raw database row for a sample, prior to domain validation.
#[derive(Debug, Clone, FromRow)]
pub struct SampleRow {
    pub id: String,
    pub sample_type: String,
    pub volume_ul: f64,
    pub location: String,
    pub expiry_date: String,
    pub created_at: Timestamp,
}

impl SampleRow {
    /// Convert the stored row into a domain [`Sample`].
    ///
    /// Fails with [`CoreError::DataIntegrity`] when the stored type or
    /// expiry date no longer parses. List-shaped reads skip such rows with
    /// a warning; single-record reads surface the error.
    pub fn into_sample(self) -> Result<Sample, CoreError> {
        let sample_type: SampleType = self.sample_type.parse().map_err(|_| {
            CoreError::DataIntegrity(format!(
                "sample {}: unknown sample type '{}'",
                self.id, self.sample_type
            ))
        })?;

        let expiry_date = NaiveDate::parse_from_str(&self.expiry_date, DATE_FORMAT)
            .map_err(|_| {
                CoreError::DataIntegrity(format!(
                    "sample {}: malformed expiry date '{}'",
                    self.id, self.expiry_date
                ))
            })?;

        Ok(Sample {
            id: self.id,
            sample_type,
            volume_ul: self.volume_ul,
            location: self.location,
            expiry_date,
            created_at: self.created_at,
        })
    }
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// DTO for inserting a validated registration. `created_at` is
/// store-assigned on insert.
#[derive(Debug, Clone)]
pub struct CreateSample {
    pub id: String,
    pub sample_type: String,
    pub volume_ul: f64,
    pub location: String,
    pub expiry_date: String,
}

impl From<&NewSample> for CreateSample {
    fn from(new: &NewSample) -> Self {
        Self {
            id: new.id.clone(),
            sample_type: new.sample_type.as_str().to_string(),
            volume_ul: new.volume_ul,
            location: new.location.clone(),
            expiry_date: new.expiry_date.format(DATE_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    use super::*;

    fn row() -> SampleRow {
        SampleRow {
            id: "abc12345".into(),
            sample_type: "Blood".into(),
            volume_ul: 25.0,
            location: "Freezer A / Rack 1 / Shelf 2 / Box 6".into(),
            expiry_date: "2025-12-31".into(),
            created_at: Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn well_formed_row_converts() {
        let sample = row().into_sample().unwrap();
        assert_eq!(sample.sample_type, SampleType::Blood);
        assert_eq!(sample.expiry_date.to_string(), "2025-12-31");
    }

    #[test]
    fn unknown_stored_type_is_a_data_integrity_error() {
        let mut bad = row();
        bad.sample_type = "Serum".into();
        assert_matches!(
            bad.into_sample().unwrap_err(),
            CoreError::DataIntegrity(msg) if msg.contains("abc12345")
        );
    }

    #[test]
    fn malformed_stored_date_is_a_data_integrity_error() {
        let mut bad = row();
        bad.expiry_date = "not-a-date".into();
        assert_matches!(
            bad.into_sample().unwrap_err(),
            CoreError::DataIntegrity(msg) if msg.contains("not-a-date")
        );
    }
}
