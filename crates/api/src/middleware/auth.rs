//! Identity extractor for Axum handlers.
//!
//! Identity is request-scoped: every protected handler takes an [`AuthUser`]
//! parameter instead of reading ambient session state.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use biotrack_core::error::CoreError;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Role assigned to identities whose token carries no role claim.
pub const DEFAULT_ROLE: &str = "Technician";

/// Authenticated user extracted from a Bearer token in the `Authorization`
/// header.
///
/// Use this as an extractor parameter in any handler that requires an
/// identity:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user = %user.email, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's email address (from `claims.sub`).
    pub email: String,
    /// The user's role name; [`DEFAULT_ROLE`] when the token has none.
    pub role: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            email: claims.sub,
            role: claims.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        })
    }
}
