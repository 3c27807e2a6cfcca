//! Registration request validation.
//!
//! Every check runs before any persistence attempt: a request that fails
//! here persists nothing and logs nothing.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::CoreError;
use crate::sample::{generate_sample_id, SampleType, StorageLocation};
use crate::types::SampleId;

/// Date format accepted for expiry dates and used in storage.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A sample registration as submitted by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationRequest {
    /// Caller-supplied id. When absent, one is generated.
    pub id: Option<String>,
    pub sample_type: String,
    pub volume_ul: f64,
    pub location: StorageLocation,
    /// Expiry date in `YYYY-MM-DD` form.
    pub expiry_date: String,
}

/// A validated registration, ready for the store adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSample {
    pub id: SampleId,
    pub sample_type: SampleType,
    pub volume_ul: f64,
    pub location: String,
    pub expiry_date: NaiveDate,
}

/// Validate a registration request.
///
/// Rejects negative or non-finite volumes, unknown sample types, expiry
/// dates that do not parse as `YYYY-MM-DD`, and blank supplied ids. A
/// missing id is generated here so the caller always receives the final
/// token.
pub fn validate_registration(request: &RegistrationRequest) -> Result<NewSample, CoreError> {
    if !request.volume_ul.is_finite() {
        return Err(CoreError::Validation(
            "volume_ul must be a finite number".into(),
        ));
    }
    if request.volume_ul < 0.0 {
        return Err(CoreError::Validation(
            "volume_ul must be non-negative".into(),
        ));
    }

    let sample_type: SampleType = request.sample_type.parse()?;

    let expiry_date = NaiveDate::parse_from_str(&request.expiry_date, DATE_FORMAT)
        .map_err(|_| {
            CoreError::Validation(format!(
                "expiry_date '{}' is not a valid YYYY-MM-DD date",
                request.expiry_date
            ))
        })?;

    let id = match &request.id {
        Some(id) if id.trim().is_empty() => {
            return Err(CoreError::Validation("id must not be blank".into()));
        }
        Some(id) => id.clone(),
        None => generate_sample_id(),
    };

    Ok(NewSample {
        id,
        sample_type,
        volume_ul: request.volume_ul,
        location: request.location.to_string(),
        expiry_date,
    })
}
