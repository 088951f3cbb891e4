// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::presentation::http::session::SessionCookie;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub session_cookie: SessionCookie,
}
