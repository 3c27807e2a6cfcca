//! The sample record: type enumeration, storage location, and id tokens.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;
use crate::types::{SampleId, Timestamp};

// ---------------------------------------------------------------------------
// Sample type
// ---------------------------------------------------------------------------

/// Biospecimen type. The set is fixed; stored values outside it are a data
/// integrity failure, not a new variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SampleType {
    Blood,
    Tissue,
    Saliva,
    Urine,
    Plasma,
}

impl SampleType {
    /// All valid sample types, in display order.
    pub const ALL: [SampleType; 5] = [
        SampleType::Blood,
        SampleType::Tissue,
        SampleType::Saliva,
        SampleType::Urine,
        SampleType::Plasma,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SampleType::Blood => "Blood",
            SampleType::Tissue => "Tissue",
            SampleType::Saliva => "Saliva",
            SampleType::Urine => "Urine",
            SampleType::Plasma => "Plasma",
        }
    }
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Blood" => Ok(SampleType::Blood),
            "Tissue" => Ok(SampleType::Tissue),
            "Saliva" => Ok(SampleType::Saliva),
            "Urine" => Ok(SampleType::Urine),
            "Plasma" => Ok(SampleType::Plasma),
            other => Err(CoreError::Validation(format!(
                "unknown sample type: '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Storage location
// ---------------------------------------------------------------------------

/// Separator between location components in the formatted string.
pub const LOCATION_SEPARATOR: &str = " / ";

/// Structured storage descriptor as submitted at registration.
///
/// Persisted as a single formatted string (`"Freezer A / Rack 1 / Shelf 2 /
/// Box 6"`); the freezer component is extracted back out of that string for
/// grouping, see [`freezer_of`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageLocation {
    pub freezer: String,
    pub rack: String,
    pub shelf: String,
    #[serde(rename = "box")]
    pub box_label: String,
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}",
            self.freezer,
            self.rack,
            self.shelf,
            self.box_label,
            sep = LOCATION_SEPARATOR
        )
    }
}

/// Extract the freezer identifier (the first component) from a formatted
/// location string. A string with no separator is treated as all-freezer.
pub fn freezer_of(location: &str) -> &str {
    location.split(LOCATION_SEPARATOR).next().unwrap_or(location)
}

// ---------------------------------------------------------------------------
// Sample record
// ---------------------------------------------------------------------------

/// A registered biospecimen. Created exactly once; never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub id: SampleId,
    pub sample_type: SampleType,
    pub volume_ul: f64,
    pub location: String,
    pub expiry_date: NaiveDate,
    pub created_at: Timestamp,
}

/// Generate a sample id: the first 8 hex characters of a random UUID.
///
/// Uniqueness is probabilistic, not guaranteed; the store adapter rejects
/// the (overwhelmingly unlikely) collision instead of overwriting.
pub fn generate_sample_id() -> SampleId {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}
