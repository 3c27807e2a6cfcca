pub mod dashboard;
pub mod health;
pub mod samples;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /samples                    register (POST), filtered listing (GET)
/// /samples/export             filtered CSV download
/// /samples/{id}               fetch one sample
/// /samples/{id}/label         printable label payload
/// /samples/{id}/activity      per-sample activity log
///
/// /dashboard/summary          filtered + global analytics
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/samples", samples::router())
        .nest("/dashboard", dashboard::router())
}
