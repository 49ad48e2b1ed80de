pub mod auth;
pub mod content_type;
pub mod origin;
pub mod rate_limit;

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderMap, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::{error::ApiError, services::metrics, AppState};

/// Runs every guard in order before the request reaches a handler:
/// origin, pre-flight pass-through, bearer token, content type, rate limit.
/// The first failing guard answers the request.
pub async fn access_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let client = client_address(&request, state.config.trust_proxy_headers);
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let verdict = run_guards(&state, &client, &request);
    let response = match verdict {
        Ok(()) => next.run(request).await,
        Err((reason, err)) => {
            tracing::warn!(client = %client, method = %method, path = %path, reason, "request rejected: {}", err);
            metrics::record_rejection(reason);
            err.into_response()
        }
    };

    let status = response.status().as_u16();
    tracing::info!(client = %client, method = %method, path = %path, status, "request completed");
    metrics::record_request(method.as_str(), status);
    response
}

/// Returns the failing guard's metric label alongside its error.
fn run_guards(state: &AppState, client: &str, request: &Request) -> Result<(), (&'static str, ApiError)> {
    let method = request.method();
    let headers = request.headers();
    let path = request.uri().path();

    origin::check_origin(headers, &state.config).map_err(|e| ("origin", e))?;

    // Pre-flight requests are answered by the CORS layer.
    if *method == Method::OPTIONS {
        return Ok(());
    }

    if state.config.require_token && !auth::is_exempt(method, path) {
        auth::authorize(headers, &state.config.token_secret, Utc::now().timestamp()).map_err(|e| {
            let reason = match e {
                ApiError::Forbidden("Missing token") => "missing_token",
                _ => "invalid_token",
            };
            (reason, e)
        })?;
    }

    content_type::check_content_type(method, headers).map_err(|e| ("content_type", e))?;

    state
        .rate_limiter
        .check(client)
        .map_err(|limit| ("rate_limit", ApiError::TooManyRequests(limit.describe())))?;

    Ok(())
}

/// Client address for logging and rate limiting.
/// The socket peer is used unless proxy headers are trusted, in which case
/// X-Real-IP, then the first X-Forwarded-For entry, take priority.
pub fn client_address(request: &Request, trust_proxy_headers: bool) -> String {
    trust_proxy_headers
        .then(|| forwarded_ip(request.headers()))
        .flatten()
        .or_else(|| {
            request
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    if let Some(ip) = headers.get("x-real-ip").and_then(|v| v.to_str().ok()) {
        let ip = ip.trim();
        if !ip.is_empty() {
            return Some(ip.to_string());
        }
    }
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|xff| xff.split(',').next())
        .map(|first| first.trim().to_string())
        .filter(|first| !first.is_empty())
}
