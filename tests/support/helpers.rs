// tests/support/helpers.rs
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use axum::response::Response;
use serde_json::Value;
use tower::util::ServiceExt as _;
use yanote::application::{
    dto::TokenSubject, ports::security::TokenManager, services::ApplicationServices,
};
use yanote::domain::note::{NewNote, NoteSlug, NoteText, NoteTitle, NoteWriteRepository};
use yanote::domain::user::{NewUser, PasswordHash, UserId, UserRepository, Username};
use yanote::infrastructure::{
    security::InMemorySessionRevocationStore, util::DefaultSlugGenerator,
};
use yanote::presentation::http::{
    routes::build_router_with_rate_limiter, session::SessionCookie, state::HttpState,
};

use super::mocks::{FakeTokenManager, FixedClock, InMemoryNotes, InMemoryUsers, StrictPasswordHasher, fixed_now};

/// A router over in-memory stores, with handles on the stores for assertions.
pub struct TestApp {
    pub router: Router,
    pub notes: Arc<InMemoryNotes>,
    pub users: Arc<InMemoryUsers>,
    pub tokens: Arc<FakeTokenManager>,
}

/// A seeded account and a session token for it.
pub struct TestUser {
    pub id: UserId,
    pub username: String,
    pub token: String,
}

impl TestApp {
    pub fn new() -> Self {
        let notes = Arc::new(InMemoryNotes::default());
        let users = Arc::new(InMemoryUsers::default());
        let tokens = Arc::new(FakeTokenManager::default());

        let services = Arc::new(ApplicationServices::new(
            users.clone(),
            notes.clone(),
            notes.clone(),
            Arc::new(StrictPasswordHasher),
            tokens.clone(),
            Arc::new(InMemorySessionRevocationStore::new()),
            Arc::new(FixedClock),
            Arc::new(DefaultSlugGenerator),
        ));

        let state = HttpState {
            services,
            session_cookie: SessionCookie::new(false, Duration::from_secs(3600)),
        };

        Self {
            router: build_router_with_rate_limiter(state, false),
            notes,
            users,
            tokens,
        }
    }

    /// Insert an account with password `password-<username>` and log it in.
    pub async fn seed_user(&self, username: &str) -> TestUser {
        let user = self
            .users
            .insert(NewUser::new(
                Username::new(username).unwrap(),
                PasswordHash::new(format!("hash::password-{username}")).unwrap(),
                fixed_now(),
            ))
            .await
            .unwrap();

        let issued = self
            .tokens
            .issue(TokenSubject {
                user_id: user.id,
                username: username.to_string(),
                session_id: Some(format!("session-{username}")),
            })
            .await
            .unwrap();

        TestUser {
            id: user.id,
            username: username.to_string(),
            token: issued.token,
        }
    }

    pub async fn seed_note(&self, author: &TestUser, title: &str, text: &str, slug: &str) {
        self.notes
            .insert(NewNote {
                title: NoteTitle::new(title).unwrap(),
                text: NoteText::new(text).unwrap(),
                slug: NoteSlug::new(slug).unwrap(),
                author_id: author.id,
            })
            .await
            .unwrap();
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response {
        let request = with_session(Request::builder().method(Method::GET).uri(uri), token)
            .body(Body::empty())
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn post_form(&self, uri: &str, token: Option<&str>, fields: &[(&str, &str)]) -> Response {
        let body = serde_urlencoded::to_string(fields).unwrap();
        let request = with_session(Request::builder().method(Method::POST).uri(uri), token)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }
}

fn with_session(builder: axum::http::request::Builder, token: Option<&str>) -> axum::http::request::Builder {
    match token {
        Some(token) => builder.header(header::COOKIE, format!("yanote_session={token}")),
        None => builder,
    }
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Assert a 303 See Other to `target`.
pub fn assert_redirect(resp: &Response, target: &str) {
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(resp), target);
}

pub fn set_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Session token carried by a `Set-Cookie` header, if any.
pub fn session_from_set_cookie(headers: &HeaderMap) -> Option<String> {
    let cookie = set_cookie(headers)?;
    let value = cookie.strip_prefix("yanote_session=")?.split(';').next()?;
    (!value.is_empty()).then(|| value.to_string())
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}

pub async fn assert_json(resp: Response, expected_status: StatusCode) -> Value {
    assert_eq!(resp.status(), expected_status);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    body_json(resp).await
}
