//! Lifecycle alert evaluator.
//!
//! Maps a sample plus a reference instant to its derived alert tags. Alert
//! status is never persisted: it depends on the clock, so every read path
//! recomputes it through this module.

use serde::Serialize;

use crate::sample::Sample;
use crate::types::Timestamp;

/// Samples expiring within this many days (inclusive) are flagged.
pub const EXPIRING_SOON_WINDOW_DAYS: i64 = 7;

/// Samples strictly below this volume are flagged. Exactly at the threshold
/// is not flagged.
pub const LOW_VOLUME_THRESHOLD_UL: f64 = 10.0;

/// Rendered status for a sample with no active alerts.
pub const OK_STATUS: &str = "✅ OK";

/// A single alert classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlertTag {
    ExpiringSoon,
    LowVolume,
}

impl AlertTag {
    pub fn label(&self) -> &'static str {
        match self {
            AlertTag::ExpiringSoon => "⚠️ Expiring Soon",
            AlertTag::LowVolume => "⚠️ Low Volume",
        }
    }
}

/// Evaluate the alert tags for one sample at the given instant.
///
/// Pure and total: same sample and same `now` always yield the same tags,
/// in stable order (Expiring Soon before Low Volume).
pub fn evaluate_alerts(sample: &Sample, now: Timestamp) -> Vec<AlertTag> {
    let mut tags = Vec::new();

    let horizon = now.date_naive() + chrono::Duration::days(EXPIRING_SOON_WINDOW_DAYS);
    if sample.expiry_date <= horizon {
        tags.push(AlertTag::ExpiringSoon);
    }

    if sample.volume_ul < LOW_VOLUME_THRESHOLD_UL {
        tags.push(AlertTag::LowVolume);
    }

    tags
}

/// Render a tag set as the human-readable status string: pipe-joined labels,
/// or [`OK_STATUS`] when no alert applies.
pub fn render_alert_status(tags: &[AlertTag]) -> String {
    if tags.is_empty() {
        return OK_STATUS.to_string();
    }
    tags.iter()
        .map(AlertTag::label)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Evaluate and render in one step.
pub fn alert_status(sample: &Sample, now: Timestamp) -> String {
    render_alert_status(&evaluate_alerts(sample, now))
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::sample::{Sample, SampleType};
    use crate::types::Timestamp;

    fn fixed_now() -> Timestamp {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 30, 0).unwrap()
    }

    fn sample(volume_ul: f64, days_to_expiry: i64) -> Sample {
        Sample {
            id: "abc12345".into(),
            sample_type: SampleType::Blood,
            volume_ul,
            location: "Freezer A / Rack 1 / Shelf 1 / Box 1".into(),
            expiry_date: fixed_now().date_naive() + Duration::days(days_to_expiry),
            created_at: fixed_now(),
        }
    }

    // -----------------------------------------------------------------------
    // Expiry window boundary
    // -----------------------------------------------------------------------

    #[test]
    fn expiry_in_exactly_seven_days_is_flagged() {
        let tags = evaluate_alerts(&sample(50.0, 7), fixed_now());
        assert_eq!(tags, vec![AlertTag::ExpiringSoon]);
    }

    #[test]
    fn expiry_in_eight_days_is_not_flagged() {
        let tags = evaluate_alerts(&sample(50.0, 8), fixed_now());
        assert!(tags.is_empty());
    }

    #[test]
    fn already_expired_sample_is_flagged() {
        let tags = evaluate_alerts(&sample(50.0, -30), fixed_now());
        assert_eq!(tags, vec![AlertTag::ExpiringSoon]);
    }

    // -----------------------------------------------------------------------
    // Volume threshold
    // -----------------------------------------------------------------------

    #[test]
    fn volume_exactly_ten_is_not_flagged() {
        let tags = evaluate_alerts(&sample(10.0, 60), fixed_now());
        assert!(tags.is_empty());
    }

    #[test]
    fn volume_just_below_ten_is_flagged() {
        let tags = evaluate_alerts(&sample(9.999, 60), fixed_now());
        assert_eq!(tags, vec![AlertTag::LowVolume]);
    }

    #[test]
    fn zero_volume_is_flagged() {
        let tags = evaluate_alerts(&sample(0.0, 60), fixed_now());
        assert_eq!(tags, vec![AlertTag::LowVolume]);
    }

    // -----------------------------------------------------------------------
    // Tag order, rendering, determinism
    // -----------------------------------------------------------------------

    #[test]
    fn both_alerts_keep_stable_order() {
        let tags = evaluate_alerts(&sample(5.0, 3), fixed_now());
        assert_eq!(tags, vec![AlertTag::ExpiringSoon, AlertTag::LowVolume]);
    }

    #[test]
    fn both_alerts_render_pipe_joined() {
        let status = alert_status(&sample(5.0, 3), fixed_now());
        assert_eq!(status, "⚠️ Expiring Soon | ⚠️ Low Volume");
    }

    #[test]
    fn no_alerts_render_ok_sentinel() {
        let status = alert_status(&sample(50.0, 60), fixed_now());
        assert_eq!(status, "✅ OK");
    }

    #[test]
    fn evaluation_is_idempotent_for_fixed_inputs() {
        let s = sample(9.0, 7);
        let now = fixed_now();
        assert_eq!(evaluate_alerts(&s, now), evaluate_alerts(&s, now));
        assert_eq!(alert_status(&s, now), alert_status(&s, now));
    }

    #[test]
    fn status_depends_on_the_reference_instant() {
        let s = sample(50.0, 8);
        // Not flagged today, flagged when evaluated one day later.
        assert_eq!(alert_status(&s, fixed_now()), OK_STATUS);
        let later = fixed_now() + Duration::days(1);
        assert_eq!(alert_status(&s, later), "⚠️ Expiring Soon");
    }
}
