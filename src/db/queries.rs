use anyhow::{Context, Result};
use sqlx::SqlitePool;

use super::models::{Post, PostWithAuthor, RemarkWithAuthor, Session, User};

// ========== Users ==========

/// Get a user by ID.
pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>> {
    sqlx::query_as("SELECT * FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("Failed to fetch user by id")
}

/// Get a user by username.
pub async fn get_user_by_username(pool: &SqlitePool, username: &str) -> Result<Option<User>> {
    sqlx::query_as("SELECT * FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await
        .context("Failed to fetch user by username")
}

/// Check if a username already exists.
pub async fn username_exists(pool: &SqlitePool, username: &str) -> Result<bool> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE username = ?")
        .bind(username)
        .fetch_one(pool)
        .await
        .context("Failed to check username existence")?;
    Ok(row.0 > 0)
}

/// Create a new user.
pub async fn create_user(pool: &SqlitePool, username: &str, password_hash: &str) -> Result<i64> {
    let result = sqlx::query(
        r"
        INSERT INTO users (username, password_hash)
        VALUES (?, ?)
        ",
    )
    .bind(username)
    .bind(password_hash)
    .execute(pool)
    .await
    .context("Failed to create user")?;

    Ok(result.last_insert_rowid())
}

/// Count total users.
pub async fn count_users(pool: &SqlitePool) -> Result<i64> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .context("Failed to count users")?;
    Ok(row.0)
}

// ========== Sessions ==========

/// Create a new session.
pub async fn create_session(
    pool: &SqlitePool,
    user_id: i64,
    token: &str,
    expires_at: &str,
) -> Result<i64> {
    let result = sqlx::query(
        r"
        INSERT INTO sessions (user_id, token, expires_at)
        VALUES (?, ?, ?)
        ",
    )
    .bind(user_id)
    .bind(token)
    .bind(expires_at)
    .execute(pool)
    .await
    .context("Failed to create session")?;

    Ok(result.last_insert_rowid())
}

/// Get a session by token.
pub async fn get_session_by_token(pool: &SqlitePool, token: &str) -> Result<Option<Session>> {
    sqlx::query_as("SELECT * FROM sessions WHERE token = ?")
        .bind(token)
        .fetch_optional(pool)
        .await
        .context("Failed to fetch session by token")
}

/// Update session last_used_at.
pub async fn update_session_last_used(pool: &SqlitePool, session_id: i64) -> Result<()> {
    sqlx::query("UPDATE sessions SET last_used_at = datetime('now') WHERE id = ?")
        .bind(session_id)
        .execute(pool)
        .await
        .context("Failed to update session last_used")?;
    Ok(())
}

/// Delete a session.
pub async fn delete_session(pool: &SqlitePool, token: &str) -> Result<()> {
    sqlx::query("DELETE FROM sessions WHERE token = ?")
        .bind(token)
        .execute(pool)
        .await
        .context("Failed to delete session")?;
    Ok(())
}

/// Delete sessions whose expiry is before `now` (RFC 3339).
///
/// Expiry timestamps are written as RFC 3339 strings, so the cutoff is bound
/// rather than taken from `datetime('now')`, which formats differently.
pub async fn delete_expired_sessions(pool: &SqlitePool, now: &str) -> Result<u64> {
    let result = sqlx::query("DELETE FROM sessions WHERE expires_at < ?")
        .bind(now)
        .execute(pool)
        .await
        .context("Failed to delete expired sessions")?;
    Ok(result.rows_affected())
}

// ========== Posts ==========

/// Create a new post.
pub async fn create_post(
    pool: &SqlitePool,
    user_id: i64,
    content: &str,
    created_at: &str,
) -> Result<i64> {
    let result = sqlx::query(
        r"
        INSERT INTO posts (user_id, content, created_at)
        VALUES (?, ?, ?)
        ",
    )
    .bind(user_id)
    .bind(content)
    .bind(created_at)
    .execute(pool)
    .await
    .context("Failed to create post")?;

    Ok(result.last_insert_rowid())
}

/// Get a post by ID.
pub async fn get_post_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Post>> {
    sqlx::query_as("SELECT * FROM posts WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("Failed to fetch post by id")
}

/// Get all posts with their authors' usernames, newest first.
pub async fn get_posts_with_authors(pool: &SqlitePool) -> Result<Vec<PostWithAuthor>> {
    sqlx::query_as(
        r"
        SELECT
            p.id,
            p.user_id,
            p.content,
            p.created_at,
            u.username as author_username
        FROM posts p
        JOIN users u ON p.user_id = u.id
        ORDER BY p.created_at DESC, p.id DESC
        ",
    )
    .fetch_all(pool)
    .await
    .context("Failed to fetch posts with authors")
}

/// Delete a post. Its remarks are removed by the FK cascade.
pub async fn delete_post(pool: &SqlitePool, post_id: i64) -> Result<()> {
    sqlx::query("DELETE FROM posts WHERE id = ?")
        .bind(post_id)
        .execute(pool)
        .await
        .context("Failed to delete post")?;
    Ok(())
}

/// Count total posts.
pub async fn count_posts(pool: &SqlitePool) -> Result<i64> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await
        .context("Failed to count posts")?;
    Ok(row.0)
}

// ========== Remarks ==========

/// Create a new remark.
pub async fn create_remark(
    pool: &SqlitePool,
    post_id: i64,
    user_id: i64,
    highlighted_text: &str,
    remark_text: &str,
    created_at: &str,
) -> Result<i64> {
    let result = sqlx::query(
        r"
        INSERT INTO remarks (post_id, user_id, highlighted_text, remark_text, created_at)
        VALUES (?, ?, ?, ?, ?)
        ",
    )
    .bind(post_id)
    .bind(user_id)
    .bind(highlighted_text)
    .bind(remark_text)
    .bind(created_at)
    .execute(pool)
    .await
    .context("Failed to create remark")?;

    Ok(result.last_insert_rowid())
}

/// Get all remarks with their authors' usernames, oldest first.
pub async fn get_remarks_with_authors(pool: &SqlitePool) -> Result<Vec<RemarkWithAuthor>> {
    sqlx::query_as(
        r"
        SELECT
            r.id,
            r.post_id,
            r.highlighted_text,
            r.remark_text,
            r.created_at,
            u.username as author_username
        FROM remarks r
        JOIN users u ON r.user_id = u.id
        ORDER BY r.created_at ASC, r.id ASC
        ",
    )
    .fetch_all(pool)
    .await
    .context("Failed to fetch remarks with authors")
}

/// Count total remarks.
pub async fn count_remarks(pool: &SqlitePool) -> Result<i64> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM remarks")
        .fetch_one(pool)
        .await
        .context("Failed to count remarks")?;
    Ok(row.0)
}

/// Count remarks attached to a post.
pub async fn count_remarks_for_post(pool: &SqlitePool, post_id: i64) -> Result<i64> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM remarks WHERE post_id = ?")
        .bind(post_id)
        .fetch_one(pool)
        .await
        .context("Failed to count remarks for post")?;
    Ok(row.0)
}
