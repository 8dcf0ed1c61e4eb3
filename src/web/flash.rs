//! One-shot flash messages carried across redirects in a cookie.
//!
//! Form handlers redirect on both success and failure; the message that
//! explains what happened rides in a `flash` cookie and is shown once on
//! the next page load, then cleared.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
    response::{IntoResponse, Redirect, Response},
};

use crate::components::AlertVariant;

/// Severity of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
    Info,
}

impl Level {
    /// Cookie token for this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    /// Alert styling for this level.
    #[must_use]
    pub const fn variant(self) -> AlertVariant {
        match self {
            Self::Success => AlertVariant::Success,
            Self::Error => AlertVariant::Error,
            Self::Info => AlertVariant::Info,
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "success" => Some(Self::Success),
            "error" => Some(Self::Error),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

/// Build a Set-Cookie value carrying a flash message.
///
/// The message is percent-encoded so it can hold spaces and punctuation.
/// Max-Age keeps a stale message from resurfacing much later if the
/// follow-up page load never happens.
#[must_use]
pub fn set_cookie(level: Level, message: &str) -> String {
    format!(
        "flash={}:{}; Path=/; HttpOnly; SameSite=Lax; Max-Age=60",
        level.as_str(),
        urlencoding::encode(message)
    )
}

/// Build a Set-Cookie value that clears the flash cookie.
#[must_use]
pub const fn clear_cookie() -> &'static str {
    "flash=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0"
}

/// Redirect to `location` with a flash message set.
pub fn redirect_with_flash(location: &str, level: Level, message: &str) -> Response {
    (
        [(header::SET_COOKIE, set_cookie(level, message))],
        Redirect::to(location),
    )
        .into_response()
}

/// Flash message left by the previous request, if any.
///
/// Handlers that consume it must also send [`clear_cookie`] so the message
/// is shown only once.
#[derive(Debug, Clone)]
pub struct IncomingFlash(pub Option<(Level, String)>);

#[async_trait]
impl<S> FromRequestParts<S> for IncomingFlash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let flash = parts
            .headers
            .get("cookie")
            .and_then(|h| h.to_str().ok())
            .and_then(|cookies| {
                cookies
                    .split(';')
                    .find_map(|cookie| cookie.trim().strip_prefix("flash="))
            })
            .and_then(parse_value);

        Ok(Self(flash))
    }
}

/// Parse the `level:message` payload of the flash cookie.
fn parse_value(raw: &str) -> Option<(Level, String)> {
    let (level, encoded) = raw.split_once(':')?;
    let level = Level::parse(level)?;
    let message = urlencoding::decode(encoded).ok()?.into_owned();
    if message.is_empty() {
        return None;
    }
    Some((level, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_cookie_encodes_message() {
        let cookie = set_cookie(Level::Error, "That username is already taken");
        assert!(cookie.starts_with("flash=error:That%20username"));
        assert!(cookie.contains("Max-Age=60"));
        assert!(cookie.contains("HttpOnly"));
    }

    #[test]
    fn test_parse_value_round_trip() {
        let cookie = set_cookie(Level::Success, "Post published");
        let raw = cookie
            .strip_prefix("flash=")
            .and_then(|rest| rest.split(';').next())
            .unwrap();

        let (level, message) = parse_value(raw).unwrap();
        assert_eq!(level, Level::Success);
        assert_eq!(message, "Post published");
    }

    #[test]
    fn test_parse_value_rejects_unknown_level() {
        assert!(parse_value("shout:HELLO").is_none());
    }

    #[test]
    fn test_parse_value_rejects_missing_separator() {
        assert!(parse_value("success").is_none());
    }

    #[test]
    fn test_parse_value_rejects_empty_message() {
        assert!(parse_value("info:").is_none());
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        assert!(clear_cookie().contains("Max-Age=0"));
    }

    #[test]
    fn test_level_variant_mapping() {
        assert_eq!(Level::Success.variant(), AlertVariant::Success);
        assert_eq!(Level::Error.variant(), AlertVariant::Error);
        assert_eq!(Level::Info.variant(), AlertVariant::Info);
    }
}
