use axum::http::{header, HeaderMap, Method};

use crate::{error::ApiError, models::auth::TokenClaims, services::auth::AuthService};

/// Routes reachable without a bearer token.
const TOKEN_EXEMPT_GETS: &[&str] = &[
    "/api/get-token",
    "/healthz",
    "/api/version",
    "/api/config",
    "/metrics",
];

pub fn is_exempt(method: &Method, path: &str) -> bool {
    *method == Method::GET && TOKEN_EXEMPT_GETS.contains(&path)
}

/// Validates the `Authorization: Bearer <token>` header against the signing secret.
pub fn authorize(headers: &HeaderMap, secret: &str, now: i64) -> Result<TokenClaims, ApiError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::Forbidden("Missing token"))?;

    AuthService::verify_token(secret, token, now).map_err(|e| {
        tracing::debug!("bearer token rejected: {}", e);
        ApiError::Forbidden("Invalid or expired token")
    })
}
