// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{auth, notes, pages};
use crate::presentation::http::middleware::rate_limit::rate_limit_layer;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Router, routing::get};
use tower_http::trace::TraceLayer;

/// Router with rate limiting on the credential endpoints. Requires the
/// server to provide `ConnectInfo<SocketAddr>` when no proxy headers are set.
#[must_use]
pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

#[must_use]
pub fn build_router_with_rate_limiter(state: HttpState, rate_limit: bool) -> Router {
    let mut credentials = Router::new()
        .route("/auth/login", get(auth::login_form).post(auth::login))
        .route("/auth/signup", get(auth::signup_form).post(auth::signup));

    if rate_limit {
        match rate_limit_layer() {
            Some(layer) => credentials = credentials.layer(layer),
            None => tracing::warn!("rate limiter configuration rejected, continuing without it"),
        }
    }

    Router::new()
        .route("/", get(pages::home))
        .route("/health", get(pages::health))
        .route("/done", get(pages::done))
        .route("/notes", get(notes::list_notes))
        .route("/notes/", get(notes::list_notes))
        .route("/notes/add", get(notes::add_form).post(notes::create_note))
        .route("/notes/{slug}", get(notes::note_detail))
        .route(
            "/notes/{slug}/edit",
            get(notes::edit_form).post(notes::update_note),
        )
        .route(
            "/notes/{slug}/delete",
            get(notes::delete_confirm).post(notes::delete_note),
        )
        .route("/auth/logout", get(auth::logout).post(auth::logout))
        .merge(credentials)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}
