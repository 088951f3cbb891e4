// src/presentation/http/session.rs
use axum::http::{HeaderValue, request::Parts};
use headers::{Authorization, Cookie, HeaderMapExt, authorization::Bearer};
use std::time::Duration;

use super::error::HttpError;

pub const SESSION_COOKIE_NAME: &str = "yanote_session";

/// Attributes of the cookie that carries the session token.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    secure: bool,
    max_age: Duration,
}

impl SessionCookie {
    #[must_use]
    pub fn new(secure: bool, max_age: Duration) -> Self {
        Self { secure, max_age }
    }

    /// `Set-Cookie` value storing `token` for the session lifetime.
    pub fn issue(&self, token: &str) -> Result<HeaderValue, HttpError> {
        self.header(token, self.max_age.as_secs())
    }

    /// `Set-Cookie` value that expires the session cookie immediately.
    pub fn clear(&self) -> Result<HeaderValue, HttpError> {
        self.header("", 0)
    }

    fn header(&self, value: &str, max_age: u64) -> Result<HeaderValue, HttpError> {
        let mut cookie = format!(
            "{SESSION_COOKIE_NAME}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}"
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        HeaderValue::try_from(cookie).map_err(|err| HttpError::internal(err.to_string()))
    }
}

/// Session token from a bearer header, falling back to the session cookie.
#[must_use]
pub fn session_token(parts: &Parts) -> Option<String> {
    if let Some(header) = parts.headers.typed_get::<Authorization<Bearer>>() {
        return Some(header.token().to_string());
    }

    parts
        .headers
        .typed_get::<Cookie>()
        .and_then(|cookie| cookie.get(SESSION_COOKIE_NAME).map(str::to_string))
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, header};

    fn parts(name: header::HeaderName, value: &str) -> Parts {
        let (parts, _) = Request::builder()
            .header(name, value)
            .body(())
            .unwrap()
            .into_parts();
        parts
    }

    #[test]
    fn issued_cookie_is_http_only_and_lax() {
        let cookie = SessionCookie::new(false, Duration::from_secs(60))
            .issue("abc")
            .unwrap();
        let cookie = cookie.to_str().unwrap();
        assert!(cookie.starts_with("yanote_session=abc;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Max-Age=60"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn secure_flag_and_clear() {
        let cookie = SessionCookie::new(true, Duration::from_secs(60))
            .clear()
            .unwrap();
        let cookie = cookie.to_str().unwrap();
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.ends_with("; Secure"));
    }

    #[test]
    fn token_is_read_from_cookie_or_bearer() {
        let from_cookie = parts(header::COOKIE, "theme=dark; yanote_session=tok");
        assert_eq!(session_token(&from_cookie).as_deref(), Some("tok"));

        let from_bearer = parts(header::AUTHORIZATION, "Bearer other");
        assert_eq!(session_token(&from_bearer).as_deref(), Some("other"));

        let cleared = parts(header::COOKIE, "yanote_session=");
        assert!(session_token(&cleared).is_none());
    }
}
