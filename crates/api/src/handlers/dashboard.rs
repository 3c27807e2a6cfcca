//! Handlers for the analytics dashboard.

use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use biotrack_core::filter::{self, AnnotatedSample};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::{load_annotated, SampleFilterParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// View models
// ---------------------------------------------------------------------------

/// Analytics over one sample set (filtered or the full collection).
#[derive(Debug, Serialize)]
pub struct AnalyticsBlock {
    pub total: usize,
    pub expiring_soon: usize,
    pub low_volume: usize,
    pub by_type: BTreeMap<String, usize>,
    pub freezer_distribution: BTreeMap<String, usize>,
}

fn analytics_block(samples: &[AnnotatedSample]) -> AnalyticsBlock {
    let aggregates = filter::aggregate(samples);
    AnalyticsBlock {
        total: aggregates.total,
        expiring_soon: aggregates.expiring_soon,
        low_volume: aggregates.low_volume,
        by_type: filter::count_by_type(samples),
        freezer_distribution: filter::freezer_distribution(samples),
    }
}

/// The filtered + global analytics split.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub filtered: AnalyticsBlock,
    pub global: AnalyticsBlock,
    /// Stored records skipped because they no longer parse.
    pub skipped_records: usize,
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// GET /dashboard/summary
///
/// Aggregate statistics over the filtered set alongside the same statistics
/// over the full collection, so narrowing a filter never hides the global
/// picture.
pub async fn summary(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<SampleFilterParams>,
) -> AppResult<impl IntoResponse> {
    let (annotated, skipped_records) = load_annotated(&state.pool, chrono::Utc::now()).await?;

    let spec = params.build_spec(&annotated)?;
    let filtered = spec.apply(&annotated);

    Ok(Json(DataResponse {
        data: DashboardSummary {
            filtered: analytics_block(&filtered),
            global: analytics_block(&annotated),
            skipped_records,
        },
    }))
}
