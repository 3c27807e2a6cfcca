//! Shared filter parameter handling for sample collection endpoints.
//!
//! The list, export, and dashboard endpoints all accept the same filter
//! dimensions; parameter parsing and collection loading live here so every
//! read path goes through one evaluator call and one malformed-record
//! policy.

use std::collections::BTreeSet;

use biotrack_core::filter::{self, AnnotatedSample, FilterSpec};
use biotrack_core::sample::SampleType;
use biotrack_core::types::Timestamp;
use biotrack_db::repositories::SampleRepo;
use biotrack_db::DbPool;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Filter dimensions accepted by collection endpoints.
///
/// Omitted dimensions default to the unrestricted specification over the
/// observed collection: every observed type and alert string, and the full
/// observed volume span.
#[derive(Debug, Default, Deserialize)]
pub struct SampleFilterParams {
    /// Comma-separated sample type names (e.g. `types=Blood,Plasma`).
    pub types: Option<String>,
    /// Comma-separated rendered alert strings (e.g. `alerts=✅ OK`).
    pub alerts: Option<String>,
    pub min_volume: Option<f64>,
    pub max_volume: Option<f64>,
}

impl SampleFilterParams {
    /// Build the effective [`FilterSpec`], starting from the unrestricted
    /// spec over `observed` and narrowing each dimension the caller set.
    ///
    /// Unknown type names are a validation error; alert strings are taken
    /// verbatim (an unobserved string simply matches nothing).
    pub fn build_spec(&self, observed: &[AnnotatedSample]) -> AppResult<FilterSpec> {
        let mut spec = FilterSpec::unrestricted(observed);

        if let Some(ref types) = self.types {
            let mut set = BTreeSet::new();
            for raw in types.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                set.insert(raw.parse::<SampleType>().map_err(AppError::Core)?);
            }
            spec.types = set;
        }

        if let Some(ref alerts) = self.alerts {
            spec.alerts = alerts
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(min) = self.min_volume {
            spec.min_volume = min;
        }
        if let Some(max) = self.max_volume {
            spec.max_volume = max;
        }

        Ok(spec)
    }
}

/// Load the full collection and annotate it with alert status at `now`,
/// skipping stored records that fail domain validation.
///
/// Returns the annotated samples plus the number of malformed records
/// skipped. Each skipped record is logged with its id and parse failure;
/// one bad record never aborts the whole read.
pub async fn load_annotated(
    pool: &DbPool,
    now: Timestamp,
) -> AppResult<(Vec<AnnotatedSample>, usize)> {
    let rows = SampleRepo::list_all(pool).await?;

    let mut samples = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;
    for row in rows {
        let id = row.id.clone();
        match row.into_sample() {
            Ok(sample) => samples.push(sample),
            Err(err) => {
                skipped += 1;
                tracing::warn!(sample_id = %id, error = %err, "Skipping malformed sample record");
            }
        }
    }

    Ok((filter::annotate(samples, now), skipped))
}
