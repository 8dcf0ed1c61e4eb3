use serde::{Deserialize, Serialize};

/// A registered account.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: String,
}

/// A server-side login session, keyed by an opaque cookie token.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Session {
    pub id: i64,
    pub user_id: i64,
    pub token: String,
    pub expires_at: String,
    pub created_at: String,
    pub last_used_at: Option<String>,
}

/// A user-authored text entry.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: String,
}

/// A commentary annotation attached to a highlighted excerpt of a post.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Remark {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub highlighted_text: String,
    pub remark_text: String,
    pub created_at: String,
}

/// A post joined with its author's username for display.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PostWithAuthor {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: String,
    pub author_username: String,
}

/// A remark joined with its author's username for display.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RemarkWithAuthor {
    pub id: i64,
    pub post_id: i64,
    pub highlighted_text: String,
    pub remark_text: String,
    pub created_at: String,
    pub author_username: String,
}
