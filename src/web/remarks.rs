//! JSON endpoint for attaching remarks to highlighted post text.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use crate::auth::MaybeUser;
use crate::db as queries;
use crate::web::AppState;

/// Request body for POST /add_remark.
///
/// All fields are optional at the deserialization layer so a missing field
/// produces a 400 from the handler rather than an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct AddRemarkRequest {
    pub post_id: Option<i64>,
    pub highlighted_text: Option<String>,
    pub remark_text: Option<String>,
}

/// POST /add_remark - Attach a remark to a span of post text.
///
/// Unlike the form routes, errors here are returned as JSON with an HTTP
/// status, because the caller is the remark script rather than a browser
/// navigation.
pub async fn add_remark(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Json(body): Json<AddRemarkRequest>,
) -> Response {
    let Some(user) = user else {
        return error_response(StatusCode::UNAUTHORIZED, "Authentication required");
    };

    let highlighted_text = body
        .highlighted_text
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());
    let remark_text = body
        .remark_text
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());

    let (Some(post_id), Some(highlighted_text), Some(remark_text)) =
        (body.post_id, highlighted_text, remark_text)
    else {
        return error_response(StatusCode::BAD_REQUEST, "Missing required fields");
    };

    match queries::get_post_by_id(state.db.pool(), post_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return error_response(StatusCode::NOT_FOUND, "Post not found"),
        Err(e) => {
            tracing::error!("Failed to fetch post for remark: {e}");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Database error");
        }
    }

    let created_at = Utc::now().to_rfc3339();
    let remark_id = match queries::create_remark(
        state.db.pool(),
        post_id,
        user.id,
        highlighted_text,
        remark_text,
        &created_at,
    )
    .await
    {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Failed to create remark: {e}");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Database error");
        }
    };

    tracing::info!(remark_id, post_id, user_id = user.id, "Remark added");

    Json(json!({
        "success": true,
        "message": "Remark added",
        "remark": {
            "id": remark_id,
            "remark_text": remark_text,
            "author": user.username,
        },
    }))
    .into_response()
}

/// JSON error body in the shape the remark script expects.
fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({ "success": false, "message": message })),
    )
        .into_response()
}
