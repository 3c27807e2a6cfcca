//! Handlers for the per-sample activity log.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use biotrack_db::repositories::ActivityLogRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /samples/{id}/activity
///
/// The sample's activity history in non-decreasing timestamp order. A
/// sample with no recorded activity yields an empty list, not an error.
pub async fn list_activity(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let entries = ActivityLogRepo::list_for_sample(&state.pool, &id).await?;
    Ok(Json(DataResponse { data: entries }))
}
