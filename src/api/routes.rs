//! API routes configuration module

use axum::http::{header, request, HeaderValue, Method};
use axum::extract::DefaultBodyLimit;
use axum::{routing::post, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::api::handlers::chat_completions;
use crate::api::AppState;
use crate::constants::CHAT_COMPLETIONS_ROUTE;

/// Creates and configures the API router
///
/// # Arguments
/// * `state` - Application state shared across handlers
/// * `log_requests` - Whether every request and response is traced at info level
///
/// Request bodies are unbounded: long-context payloads must reach the
/// handler instead of being answered with 413.
pub fn app(state: AppState, log_requests: bool) -> Router {
    let router = Router::new()
        .route(CHAT_COMPLETIONS_ROUTE, post(chat_completions))
        .layer(DefaultBodyLimit::disable())
        .layer(cors_layer())
        .with_state(state);

    if log_requests {
        router.layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
    } else {
        router
    }
}

/// Browser clients on any http(s) origin may post payloads
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            |origin: &HeaderValue, _request: &request::Parts| {
                let origin = origin.as_bytes();
                origin.starts_with(b"https://") || origin.starts_with(b"http://")
            },
        ))
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
