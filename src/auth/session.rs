use rand::{distributions::Alphanumeric, thread_rng, Rng};

/// Generate a cryptographically secure random session token.
pub fn generate_session_token() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

/// Compute the RFC 3339 expiry timestamp for a session created now.
#[must_use]
pub fn session_expires_at(ttl_secs: i64) -> String {
    (chrono::Utc::now() + chrono::Duration::seconds(ttl_secs)).to_rfc3339()
}
