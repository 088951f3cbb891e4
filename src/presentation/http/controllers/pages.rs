// src/presentation/http/controllers/pages.rs
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

pub async fn home(actor: MaybeAuthenticated) -> Json<HomeResponse> {
    let username = actor.0.map(|user| user.username);
    Json(HomeResponse {
        authenticated: username.is_some(),
        username,
    })
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}

pub async fn done(Authenticated(_actor): Authenticated) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "done".into(),
    })
}
