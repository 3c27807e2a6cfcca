//! Handlers for sample registration and retrieval.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use biotrack_core::activity::{action_types, registration_details};
use biotrack_core::alert;
use biotrack_core::error::CoreError;
use biotrack_core::filter::{self, AnnotatedSample, SampleAggregates};
use biotrack_core::registration::{validate_registration, RegistrationRequest};
use biotrack_core::types::Timestamp;
use biotrack_db::models::activity::CreateActivityLog;
use biotrack_db::models::sample::CreateSample;
use biotrack_db::repositories::{ActivityLogRepo, SampleRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::{load_annotated, SampleFilterParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// View models
// ---------------------------------------------------------------------------

/// A sample with its alert status, as returned to clients.
#[derive(Debug, Serialize)]
pub struct SampleView {
    pub id: String,
    pub sample_type: String,
    pub volume_ul: f64,
    pub location: String,
    pub expiry_date: chrono::NaiveDate,
    pub created_at: Timestamp,
    pub alert: String,
}

impl SampleView {
    pub fn from_annotated(annotated: AnnotatedSample) -> Self {
        let AnnotatedSample { sample, alert } = annotated;
        Self {
            id: sample.id,
            sample_type: sample.sample_type.to_string(),
            volume_ul: sample.volume_ul,
            location: sample.location,
            expiry_date: sample.expiry_date,
            created_at: sample.created_at,
            alert,
        }
    }
}

/// Response payload for a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisteredSample {
    pub sample: SampleView,
    /// Whether the registration activity entry was written. Registration
    /// succeeds even when it was not (partial-failure semantics).
    pub activity_logged: bool,
}

/// Response payload for the filtered listing.
#[derive(Debug, Serialize)]
pub struct SampleListPage {
    pub items: Vec<SampleView>,
    pub aggregates: SampleAggregates,
    /// Stored records skipped because they no longer parse.
    pub skipped_records: usize,
}

// ---------------------------------------------------------------------------
// Register
// ---------------------------------------------------------------------------

/// POST /samples
///
/// Validate and persist a new sample, then append the registration activity
/// entry. A failed activity write is reported but never rolls back the
/// registration.
pub async fn register_sample(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<RegistrationRequest>,
) -> AppResult<impl IntoResponse> {
    let new = validate_registration(&input)?;

    let dto = CreateSample::from(&new);
    let row = SampleRepo::insert(&state.pool, &dto).await?.ok_or_else(|| {
        AppError::Core(CoreError::Conflict(format!(
            "Sample '{}' is already registered",
            new.id
        )))
    })?;
    let sample = row.into_sample()?;

    let entry = CreateActivityLog {
        sample_id: sample.id.clone(),
        action: action_types::REGISTER_SAMPLE.to_string(),
        details: registration_details(sample.volume_ul, &sample.location),
    };
    let activity_logged = match ActivityLogRepo::insert(&state.pool, &entry).await {
        Ok(_) => true,
        Err(err) => {
            tracing::warn!(
                sample_id = %sample.id,
                error = %err,
                "Activity log write failed; registration is unaffected",
            );
            false
        }
    };

    tracing::info!(sample_id = %sample.id, user = %user.email, "Sample registered");

    let alert = alert::alert_status(&sample, chrono::Utc::now());
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: RegisteredSample {
                sample: SampleView::from_annotated(AnnotatedSample { sample, alert }),
                activity_logged,
            },
        }),
    ))
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

/// GET /samples
///
/// The filtered listing: annotate the full collection, narrow it by the
/// caller's filter dimensions, and aggregate over the result.
pub async fn list_samples(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<SampleFilterParams>,
) -> AppResult<impl IntoResponse> {
    let (annotated, skipped_records) = load_annotated(&state.pool, chrono::Utc::now()).await?;

    let spec = params.build_spec(&annotated)?;
    let filtered = spec.apply(&annotated);
    let aggregates = filter::aggregate(&filtered);

    let items = filtered
        .into_iter()
        .map(SampleView::from_annotated)
        .collect();

    Ok(Json(DataResponse {
        data: SampleListPage {
            items,
            aggregates,
            skipped_records,
        },
    }))
}

// ---------------------------------------------------------------------------
// Fetch one
// ---------------------------------------------------------------------------

/// GET /samples/{id}
pub async fn get_sample(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let row = SampleRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "sample",
                id: id.clone(),
            })
        })?;

    // A single record has nothing to skip to: surface the integrity error.
    let sample = row.into_sample()?;
    let alert = alert::alert_status(&sample, chrono::Utc::now());

    Ok(Json(DataResponse {
        data: SampleView::from_annotated(AnnotatedSample { sample, alert }),
    }))
}
