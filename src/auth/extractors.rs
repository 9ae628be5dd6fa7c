use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use crate::auth::jwt::JwtKeys;
use crate::auth::repo::User;
use crate::errors::AppError;
use crate::state::AppState;

/// Resolves the bearer token on a request to the acting user record.
/// Protected handlers take this as an argument; resolution failure rejects
/// the request with 401 before any business logic runs.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AppError::Auth("Missing Authorization header".into()))?;

        // Expect "Bearer <token>"
        let token = auth
            .strip_prefix("Bearer ")
            .or_else(|| auth.strip_prefix("bearer "))
            .ok_or_else(|| AppError::Auth("Invalid Authorization header".into()))?;

        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify(token).map_err(|_| {
            warn!("invalid or expired token");
            AppError::Auth("Invalid auth token".into())
        })?;

        let user = User::find_by_id(&state.db, claims.sub)
            .await
            .map_err(AppError::Internal)?
            .ok_or_else(|| AppError::Auth("User not found".into()))?;

        Ok(CurrentUser(user))
    }
}
