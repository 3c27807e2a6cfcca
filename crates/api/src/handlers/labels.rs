//! Handlers for identification artifacts.
//!
//! Returns the label view model and scannable payload; rendering to a QR
//! image or printable PDF happens client-side.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use biotrack_core::error::CoreError;
use biotrack_core::label::label_data;
use biotrack_db::repositories::SampleRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /samples/{id}/label
pub async fn get_label(
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

    let sample = row.into_sample()?;

    Ok(Json(DataResponse {
        data: label_data(&sample),
    }))
}
