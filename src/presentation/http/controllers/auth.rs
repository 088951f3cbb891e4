// src/presentation/http/controllers/auth.rs
use crate::application::commands::users::{LoginUserCommand, SignupCommand};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{MaybeAuthenticated, safe_next};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Form, Json,
    extract::Query,
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Default, Deserialize)]
pub struct NextParams {
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub next: Option<String>,
}

/// Login input echoed back on failure. The password never is.
#[derive(Debug, Default, Serialize)]
pub struct LoginFormEcho {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password1: String,
    #[serde(default)]
    pub password2: String,
}

#[derive(Debug, Default, Serialize)]
pub struct SignupFormEcho {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct AuthFormPage<F> {
    pub action: &'static str,
    pub form: F,
    pub fields: &'static [&'static str],
}

pub async fn login_form(Query(params): Query<NextParams>) -> Json<AuthFormPage<LoginFormEcho>> {
    Json(AuthFormPage {
        action: "/auth/login",
        form: LoginFormEcho {
            username: String::new(),
            next: params.next,
        },
        fields: &["username", "password"],
    })
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Query(params): Query<NextParams>,
    Form(payload): Form<LoginRequest>,
) -> HttpResult<Response> {
    let next = payload.next.or(params.next);
    let echo = LoginFormEcho {
        username: payload.username.clone(),
        next: next.clone(),
    };

    let result = state
        .services
        .user_commands
        .login(LoginUserCommand {
            username: payload.username,
            password: payload.password,
        })
        .await
        .into_form_http(&echo)?;

    let cookie = state.session_cookie.issue(&result.token.token)?;
    let target = safe_next(next.as_deref());
    Ok(([(SET_COOKIE, cookie)], Redirect::to(target)).into_response())
}

pub async fn logout(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
) -> HttpResult<Response> {
    if let Some(user) = actor.0.as_ref() {
        state.services.user_commands.logout(user).await.into_http()?;
    }

    let cookie = state.session_cookie.clear()?;
    Ok((
        [(SET_COOKIE, cookie)],
        Json(json!({ "status": "logged_out" })),
    )
        .into_response())
}

pub async fn signup_form() -> Json<AuthFormPage<SignupFormEcho>> {
    Json(AuthFormPage {
        action: "/auth/signup",
        form: SignupFormEcho::default(),
        fields: &["username", "password1", "password2"],
    })
}

pub async fn signup(
    Extension(state): Extension<HttpState>,
    Form(payload): Form<SignupRequest>,
) -> HttpResult<Redirect> {
    let echo = SignupFormEcho {
        username: payload.username.clone(),
    };

    state
        .services
        .user_commands
        .signup(SignupCommand {
            username: payload.username,
            password1: payload.password1,
            password2: payload.password2,
        })
        .await
        .into_form_http(&echo)?;

    Ok(Redirect::to("/"))
}
