// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

type CredentialsLimiter = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client-IP limiter for the credential endpoints: one request every
/// two seconds on average with bursts of five. Shared across routers so
/// every request counts against the same buckets.
#[must_use]
pub fn rate_limit_layer() -> Option<CredentialsLimiter> {
    static RATE_LIMITER: OnceLock<Option<CredentialsLimiter>> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(2);
            builder.burst_size(5);
            let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;

            Some(GovernorLayer::new(config))
        })
        .clone()
}
