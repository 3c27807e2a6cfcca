//! Route definitions for sample registration, browsing, and artifacts.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{activity, export, labels, samples};
use crate::state::AppState;

/// Sample routes mounted at `/samples`.
///
/// All routes require an identity (enforced by handler extractors).
///
/// ```text
/// POST /                 -> register_sample
/// GET  /                 -> list_samples
/// GET  /export           -> export_samples
/// GET  /{id}             -> get_sample
/// GET  /{id}/label       -> get_label
/// GET  /{id}/activity    -> list_activity
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(samples::register_sample).get(samples::list_samples))
        .route("/export", get(export::export_samples))
        .route("/{id}", get(samples::get_sample))
        .route("/{id}/label", get(labels::get_label))
        .route("/{id}/activity", get(activity::list_activity))
}
