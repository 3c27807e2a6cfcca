//! Identification artifact payloads.
//!
//! Builds the scannable text payload and the printable label view model.
//! Encoding those into a QR image or PDF is the presentation layer's job.

use chrono::NaiveDate;
use serde::Serialize;

use crate::registration::DATE_FORMAT;
use crate::sample::Sample;

/// The text encoded into a sample's QR artifact.
pub fn qr_payload(sample: &Sample) -> String {
    format!(
        "ID: {}\nType: {}\nLocation: {}\nExpiry: {}",
        sample.id,
        sample.sample_type,
        sample.location,
        sample.expiry_date.format(DATE_FORMAT),
    )
}

/// Printable label fields plus the scannable payload.
#[derive(Debug, Clone, Serialize)]
pub struct LabelData {
    pub sample_id: String,
    pub sample_type: String,
    pub volume_ul: f64,
    pub location: String,
    pub expiry_date: NaiveDate,
    pub qr_payload: String,
}

pub fn label_data(sample: &Sample) -> LabelData {
    LabelData {
        sample_id: sample.id.clone(),
        sample_type: sample.sample_type.to_string(),
        volume_ul: sample.volume_ul,
        location: sample.location.clone(),
        expiry_date: sample.expiry_date,
        qr_payload: qr_payload(sample),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::*;
    use crate::sample::{Sample, SampleType};

    fn sample() -> Sample {
        Sample {
            id: "deadbeef".into(),
            sample_type: SampleType::Saliva,
            volume_ul: 12.5,
            location: "Freezer C / Rack 2 / Shelf 3 / Box 4".into(),
            expiry_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
            created_at: Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn payload_has_four_labeled_lines() {
        let payload = qr_payload(&sample());
        assert_eq!(
            payload,
            "ID: deadbeef\nType: Saliva\nLocation: Freezer C / Rack 2 / Shelf 3 / Box 4\nExpiry: 2026-01-31"
        );
    }

    #[test]
    fn label_data_serializes_all_fields() {
        let json = serde_json::to_value(label_data(&sample())).unwrap();
        assert_eq!(json["sample_id"], "deadbeef");
        assert_eq!(json["sample_type"], "Saliva");
        assert_eq!(json["volume_ul"], 12.5);
        assert_eq!(json["expiry_date"], "2026-01-31");
        assert!(json["qr_payload"].as_str().unwrap().starts_with("ID: deadbeef\n"));
    }
}
