use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::Response,
};
use sqlx::SqlitePool;

use crate::db as queries;
use crate::db::User;

/// Current authenticated user (if any).
/// Handlers branch on the inner Option so each route can shape its own
/// unauthenticated response (flash redirect for forms, 401 JSON for the
/// remark endpoint).
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<User>);

#[async_trait]
impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
    SqlitePool: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract database pool from state
        let pool = SqlitePool::from_ref(state);

        // Try to get session token from cookie
        let token = parts
            .headers
            .get("cookie")
            .and_then(|h| h.to_str().ok())
            .and_then(|cookies| {
                cookies.split(';').find_map(|cookie| {
                    let cookie = cookie.trim();
                    cookie.strip_prefix("session=")
                })
            });

        let Some(token) = token else {
            return Ok(MaybeUser(None));
        };

        // Look up session
        let session = match queries::get_session_by_token(&pool, token).await {
            Ok(Some(s)) => s,
            _ => return Ok(MaybeUser(None)),
        };

        // Check if session is expired
        let now = chrono::Utc::now().to_rfc3339();
        if session.expires_at < now {
            // Clean up expired session
            let _ = queries::delete_session(&pool, token).await;
            return Ok(MaybeUser(None));
        };

        // Get user
        let user = match queries::get_user_by_id(&pool, session.user_id).await {
            Ok(Some(u)) => u,
            _ => return Ok(MaybeUser(None)),
        };

        // Update session last_used_at
        let _ = queries::update_session_last_used(&pool, session.id).await;

        Ok(MaybeUser(Some(user)))
    }
}
