//! Handler for the filtered CSV download.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use biotrack_core::export;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::{load_annotated, SampleFilterParams};
use crate::state::AppState;

/// GET /samples/export
///
/// Serialize the filtered sample set to CSV for download. Accepts the same
/// filter dimensions as the listing endpoint.
pub async fn export_samples(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<SampleFilterParams>,
) -> AppResult<impl IntoResponse> {
    let (annotated, _skipped) = load_annotated(&state.pool, chrono::Utc::now()).await?;

    let spec = params.build_spec(&annotated)?;
    let filtered = spec.apply(&annotated);

    let csv_output = export::to_csv(&filtered);

    Ok(axum::response::Response::builder()
        .status(200)
        .header("Content-Type", "text/csv")
        .header(
            "Content-Disposition",
            "attachment; filename=\"biospecimen_samples.csv\"",
        )
        .body(axum::body::Body::from(csv_output))
        .unwrap()
        .into_response())
}
