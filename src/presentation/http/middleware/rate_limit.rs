// src/presentation/http/middleware/rate_limit.rs
use crate::config::RateLimitSettings;
use crate::presentation::http::error::HttpError;
use ::governor::middleware::NoOpMiddleware;
use axum::{
    body::Body,
    extract::Request,
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type RateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

const MAX_LIMITER_BODY: usize = 16 * 1024;

/// Per-client-IP limiter. Returns `None` when the governor rejects the settings.
pub fn rate_limit_layer(settings: RateLimitSettings) -> Option<RateLimitLayer> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_millisecond(settings.replenish_interval_ms());
    builder.burst_size(settings.burst_size);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;

    Some(GovernorLayer::new(config))
}

/// Rewrites the limiter's plain-text rejections (429, and 500 when no client
/// address can be found) into the JSON error body. Rate-limit headers such as
/// `retry-after` are kept.
pub async fn limiter_errors_as_json(req: Request, next: Next) -> Response {
    let response = next.run(req).await;
    let status = response.status();
    if !(status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error())
        || is_json(&response)
    {
        return response;
    }

    let (parts, body) = response.into_parts();
    let message = match axum::body::to_bytes(body, MAX_LIMITER_BODY).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).trim().to_string(),
        Err(err) => {
            tracing::warn!(error = %err, "could not read rate limiter response body");
            String::new()
        }
    };
    let message = if message.is_empty() {
        status.canonical_reason().unwrap_or("error").to_string()
    } else {
        message
    };

    let mut rewritten = HttpError::with_status(status, message).into_response();
    for (name, value) in &parts.headers {
        if name != header::CONTENT_TYPE && name != header::CONTENT_LENGTH {
            rewritten.headers_mut().insert(name.clone(), value.clone());
        }
    }
    rewritten
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}
