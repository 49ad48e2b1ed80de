use axum::http::{header, HeaderMap};

use crate::{config::Config, error::ApiError};

/// Rejects requests whose `Origin` header is not on the allow-list.
///
/// Requests without an `Origin` header (same-origin navigation, curl, server-side
/// callers) are let through; this guard only stops cross-origin browser calls.
pub fn check_origin(headers: &HeaderMap, config: &Config) -> Result<(), ApiError> {
    let Some(origin) = headers.get(header::ORIGIN) else {
        return Ok(());
    };
    match origin.to_str() {
        Ok(o) if config.is_origin_allowed(o) => Ok(()),
        _ => Err(ApiError::Forbidden("Origin not allowed")),
    }
}
