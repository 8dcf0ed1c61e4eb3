//! Handlers for the post feed, composition, and deletion.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use chrono::Utc;
use serde::Deserialize;

use crate::auth::MaybeUser;
use crate::db as queries;
use crate::db::RemarkWithAuthor;
use crate::web::flash::{self, IncomingFlash, Level};
use crate::web::{pages, AppState};

/// GET / - The post feed, newest first, with remarks inline.
pub async fn home(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    IncomingFlash(flash): IncomingFlash,
) -> Response {
    let posts = match queries::get_posts_with_authors(state.db.pool()).await {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("Failed to fetch posts: {e}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response();
        }
    };

    let remarks = match queries::get_remarks_with_authors(state.db.pool()).await {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to fetch remarks: {e}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response();
        }
    };

    let remarks_by_post = group_remarks(remarks);

    let flash_display = flash
        .as_ref()
        .map(|(level, message)| (level.variant(), message.as_str()));
    let params = pages::HomePageParams::new(&posts, &remarks_by_post, user.as_ref())
        .with_flash(flash_display);
    let html = pages::render_home_page(params).into_string();

    // The flash was shown; clear it so a reload doesn't repeat it
    if flash.is_some() {
        ([(header::SET_COOKIE, flash::clear_cookie())], Html(html)).into_response()
    } else {
        Html(html).into_response()
    }
}

/// Group remarks by the post they belong to, preserving query order.
fn group_remarks(remarks: Vec<RemarkWithAuthor>) -> HashMap<i64, Vec<RemarkWithAuthor>> {
    let mut by_post: HashMap<i64, Vec<RemarkWithAuthor>> = HashMap::new();
    for remark in remarks {
        by_post.entry(remark.post_id).or_default().push(remark);
    }
    by_post
}

/// GET /create - Show the post composition form.
pub async fn compose_page(
    MaybeUser(user): MaybeUser,
    IncomingFlash(flash): IncomingFlash,
) -> Response {
    let Some(user) = user else {
        return flash::redirect_with_flash("/login", Level::Error, "Log in to write a post");
    };

    let flash_display = flash
        .as_ref()
        .map(|(level, message)| (level.variant(), message.as_str()));
    let html = pages::render_compose_page(&user, flash_display).into_string();

    if flash.is_some() {
        ([(header::SET_COOKIE, flash::clear_cookie())], Html(html)).into_response()
    } else {
        Html(html).into_response()
    }
}

/// Form data for creating a post.
#[derive(Debug, Deserialize)]
pub struct ComposeForm {
    #[serde(default)]
    content: String,
}

/// POST /create - Create a new post.
pub async fn compose_post(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Form(form): Form<ComposeForm>,
) -> Response {
    let Some(user) = user else {
        return flash::redirect_with_flash("/login", Level::Error, "Log in to write a post");
    };

    let content = form.content.trim();
    if content.is_empty() {
        return flash::redirect_with_flash(
            "/create",
            Level::Error,
            "Post content cannot be empty",
        );
    }

    let created_at = Utc::now().to_rfc3339();
    match queries::create_post(state.db.pool(), user.id, content, &created_at).await {
        Ok(post_id) => {
            tracing::info!(post_id, user_id = user.id, "Post created");
            flash::redirect_with_flash("/", Level::Success, "Post published")
        }
        Err(e) => {
            tracing::error!("Failed to create post: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
        }
    }
}

/// POST /delete_post/:post_id - Delete a post and its remarks.
///
/// Only the post's author may delete it.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    MaybeUser(user): MaybeUser,
) -> Response {
    let Some(user) = user else {
        return flash::redirect_with_flash("/login", Level::Error, "Log in first");
    };

    let post = match queries::get_post_by_id(state.db.pool(), post_id).await {
        Ok(Some(p)) => p,
        Ok(None) => {
            return (StatusCode::NOT_FOUND, "Post not found").into_response();
        }
        Err(e) => {
            tracing::error!("Failed to fetch post for deletion: {e}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response();
        }
    };

    if post.user_id != user.id {
        return flash::redirect_with_flash(
            "/",
            Level::Error,
            "You can only delete your own posts",
        );
    }

    // Remarks go with the post via the FK cascade
    if let Err(e) = queries::delete_post(state.db.pool(), post_id).await {
        tracing::error!("Failed to delete post: {e}");
        return (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response();
    }

    tracing::info!(post_id, user_id = user.id, "Post deleted");
    flash::redirect_with_flash("/", Level::Success, "Post deleted")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remark(id: i64, post_id: i64) -> RemarkWithAuthor {
        RemarkWithAuthor {
            id,
            post_id,
            highlighted_text: "text".to_string(),
            remark_text: "note".to_string(),
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
            author_username: "bob".to_string(),
        }
    }

    #[test]
    fn test_group_remarks_by_post() {
        let grouped = group_remarks(vec![remark(1, 10), remark(2, 20), remark(3, 10)]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[&10].len(), 2);
        assert_eq!(grouped[&20].len(), 1);
        // Order within a post follows the input (oldest first from the query)
        assert_eq!(grouped[&10][0].id, 1);
        assert_eq!(grouped[&10][1].id, 3);
    }

    #[test]
    fn test_group_remarks_empty() {
        assert!(group_remarks(Vec::new()).is_empty());
    }
}
