// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::{session::session_token, state::HttpState},
};
use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};

use super::error::HttpError;

pub const LOGIN_PATH: &str = "/auth/login";

/// A logged-in requester. Anonymous requests are redirected to the login
/// page with the original path in `next`.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match resolve_user(parts).await {
            Ok(Some(user)) => Ok(Self(user)),
            Ok(None) => Err(Redirect::to(&login_redirect_target(parts)).into_response()),
            Err(err) => Err(err.into_response()),
        }
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        resolve_user(parts).await.map(Self)
    }
}

/// Invalid, expired and revoked tokens all count as anonymous.
async fn resolve_user(parts: &Parts) -> Result<Option<AuthenticatedUser>, HttpError> {
    let state = parts
        .extensions
        .get::<HttpState>()
        .ok_or_else(|| HttpError::internal("application state missing"))?;

    let Some(token) = session_token(parts) else {
        return Ok(None);
    };

    match state.services.authenticate(&token).await {
        Ok(user) => Ok(Some(user)),
        Err(ApplicationError::Unauthorized(reason)) => {
            tracing::debug!(%reason, "ignoring unusable session token");
            Ok(None)
        }
        Err(err) => Err(HttpError::from_error(err)),
    }
}

fn login_redirect_target(parts: &Parts) -> String {
    let next = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    login_url(next)
}

/// `/auth/login?next=<next>` with `next` form-encoded except for `/`.
#[must_use]
pub fn login_url(next: &str) -> String {
    match serde_urlencoded::to_string([("next", next)]) {
        Ok(query) => format!("{LOGIN_PATH}?{}", query.replace("%2F", "/")),
        Err(_) => LOGIN_PATH.to_string(),
    }
}

/// Only same-site absolute paths are honoured as post-login targets.
#[must_use]
pub fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path
        }
        _ => "/",
    }
}
