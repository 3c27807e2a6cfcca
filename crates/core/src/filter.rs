//! Query/filter engine over the annotated sample collection.
//!
//! Stateless transforms: every read materializes the full collection,
//! annotates it through the alert evaluator, then narrows and aggregates
//! here. There is no cached filtered view to invalidate.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::alert;
use crate::sample::{freezer_of, Sample, SampleType};
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Annotated samples
// ---------------------------------------------------------------------------

/// A sample paired with its rendered alert status at annotation time.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedSample {
    pub sample: Sample,
    pub alert: String,
}

/// Annotate a collection with alert status evaluated at `now`.
pub fn annotate(samples: Vec<Sample>, now: Timestamp) -> Vec<AnnotatedSample> {
    samples
        .into_iter()
        .map(|sample| {
            let alert = alert::alert_status(&sample, now);
            AnnotatedSample { sample, alert }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Filter specification
// ---------------------------------------------------------------------------

/// User-selected predicates, ANDed across dimensions.
///
/// A sample passes iff its type is in `types`, its rendered alert string is
/// in `alerts`, and its volume lies within `[min_volume, max_volume]`
/// (inclusive on both ends).
#[derive(Debug, Clone)]
pub struct FilterSpec {
    pub types: BTreeSet<SampleType>,
    pub alerts: BTreeSet<String>,
    pub min_volume: f64,
    pub max_volume: f64,
}

impl FilterSpec {
    /// The default specification over a given collection: every observed
    /// type, every observed alert string, and the observed volume span.
    ///
    /// An empty collection yields `[0.0, 0.0]` bounds and empty accept-sets,
    /// which is a valid state (the empty set filtered is the empty set).
    pub fn unrestricted(samples: &[AnnotatedSample]) -> Self {
        let types = samples.iter().map(|s| s.sample.sample_type).collect();
        let alerts = samples.iter().map(|s| s.alert.clone()).collect();

        let mut min_volume = f64::INFINITY;
        let mut max_volume = f64::NEG_INFINITY;
        for s in samples {
            min_volume = min_volume.min(s.sample.volume_ul);
            max_volume = max_volume.max(s.sample.volume_ul);
        }
        if samples.is_empty() {
            min_volume = 0.0;
            max_volume = 0.0;
        }

        Self {
            types,
            alerts,
            min_volume,
            max_volume,
        }
    }

    pub fn matches(&self, s: &AnnotatedSample) -> bool {
        self.types.contains(&s.sample.sample_type)
            && self.alerts.contains(&s.alert)
            && s.sample.volume_ul >= self.min_volume
            && s.sample.volume_ul <= self.max_volume
    }

    /// Narrow a collection to the samples matching every dimension.
    pub fn apply(&self, samples: &[AnnotatedSample]) -> Vec<AnnotatedSample> {
        samples.iter().filter(|s| self.matches(s)).cloned().collect()
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Headline counts over a (filtered or unfiltered) sample set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleAggregates {
    pub total: usize,
    pub expiring_soon: usize,
    pub low_volume: usize,
}

/// Compute headline counts. The alert counts match on the rendered string,
/// so a sample carrying both tags contributes to both.
pub fn aggregate(samples: &[AnnotatedSample]) -> SampleAggregates {
    SampleAggregates {
        total: samples.len(),
        expiring_soon: samples
            .iter()
            .filter(|s| s.alert.contains("Expiring Soon"))
            .count(),
        low_volume: samples
            .iter()
            .filter(|s| s.alert.contains("Low Volume"))
            .count(),
    }
}

/// Sample counts per type label.
pub fn count_by_type(samples: &[AnnotatedSample]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for s in samples {
        *counts
            .entry(s.sample.sample_type.as_str().to_string())
            .or_insert(0) += 1;
    }
    counts
}

/// Sample counts partitioned by the freezer component of the location.
pub fn freezer_distribution(samples: &[AnnotatedSample]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for s in samples {
        *counts
            .entry(freezer_of(&s.sample.location).to_string())
            .or_insert(0) += 1;
    }
    counts
}
