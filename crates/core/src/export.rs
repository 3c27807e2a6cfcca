//! CSV serialization of an annotated sample set for download.

use crate::filter::AnnotatedSample;
use crate::registration::DATE_FORMAT;

/// Header row of the sample export.
pub const CSV_HEADER: &str =
    "Sample ID,Type,Volume (µL),Storage Location,Expiry Date,Registered At,Alert";

/// Serialize samples to CSV, one row per sample, header first.
pub fn to_csv(samples: &[AnnotatedSample]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for s in samples {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            csv_field(&s.sample.id),
            s.sample.sample_type,
            s.sample.volume_ul,
            csv_field(&s.sample.location),
            s.sample.expiry_date.format(DATE_FORMAT),
            s.sample.created_at.to_rfc3339(),
            csv_field(&s.alert),
        ));
    }

    out
}

/// Quote a field when it contains a separator, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::filter::annotate;
    use crate::sample::{Sample, SampleType};
    use crate::types::Timestamp;

    fn fixed_now() -> Timestamp {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 30, 0).unwrap()
    }

    fn sample(id: &str, location: &str) -> Sample {
        Sample {
            id: id.into(),
            sample_type: SampleType::Plasma,
            volume_ul: 50.0,
            location: location.into(),
            expiry_date: fixed_now().date_naive() + Duration::days(60),
            created_at: fixed_now(),
        }
    }

    #[test]
    fn empty_set_is_header_only() {
        assert_eq!(to_csv(&[]), format!("{CSV_HEADER}\n"));
    }

    #[test]
    fn rows_carry_all_columns() {
        let annotated = annotate(
            vec![sample("A2", "Freezer A / Rack 1 / Shelf 1 / Box 1")],
            fixed_now(),
        );
        let csv = to_csv(&annotated);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        let row = lines.next().unwrap();
        assert_eq!(
            row,
            "A2,Plasma,50,Freezer A / Rack 1 / Shelf 1 / Box 1,2025-08-14,2025-06-15T12:30:00+00:00,✅ OK"
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn fields_containing_commas_are_quoted() {
        let annotated = annotate(
            vec![sample("A3", "Freezer A / Rack 1 / Shelf 1 / Box 6, back row")],
            fixed_now(),
        );
        let csv = to_csv(&annotated);
        assert!(csv.contains("\"Freezer A / Rack 1 / Shelf 1 / Box 6, back row\""));
    }
}
