// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError, forms::FieldErrors};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    errors: Option<FieldErrors>,
    form: Option<serde_json::Value>,
}

impl HttpError {
    #[must_use]
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Form(errors) => Self {
                errors: Some(errors),
                ..Self::new(
                    StatusCode::BAD_REQUEST,
                    "the submitted form contains errors".into(),
                )
            },
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Infrastructure(msg) => Self::internal(msg),
            ApplicationError::Domain(domain_err) => match domain_err {
                DomainError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
                DomainError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
                DomainError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
                DomainError::Persistence(msg) => Self::internal(msg),
            },
        }
    }

    /// Internal failures are logged in full and reported generically.
    #[must_use]
    pub fn internal(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        tracing::error!(error = %detail, "request failed");
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error".into(),
        )
    }

    /// Echo the submitted input so the client can re-render its form.
    #[must_use]
    pub fn with_form<T: Serialize>(mut self, form: &T) -> Self {
        if self.status == StatusCode::BAD_REQUEST {
            self.form = serde_json::to_value(form).ok();
        }
        self
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            errors: None,
            form: None,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorBody {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
            errors: self.errors,
            form: self.form,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    form: Option<serde_json::Value>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;

    /// Like `into_http`, attaching the submitted form to 400 responses.
    fn into_form_http<F: Serialize>(self, form: &F) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }

    fn into_form_http<F: Serialize>(self, form: &F) -> HttpResult<T> {
        self.map_err(|err| HttpError::from_error(err).with_form(form))
    }
}
