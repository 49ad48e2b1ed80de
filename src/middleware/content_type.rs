use axum::http::{header, HeaderMap, Method};

use crate::error::ApiError;

/// Writes must carry a JSON body. Parameters such as `charset` are ignored.
pub fn check_content_type(method: &Method, headers: &HeaderMap) -> Result<(), ApiError> {
    if *method != Method::POST && *method != Method::PUT {
        return Ok(());
    }

    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<mime::Mime>().ok())
        .map(|m| m.essence_str() == mime::APPLICATION_JSON.essence_str())
        .unwrap_or(false);

    if is_json {
        Ok(())
    } else {
        Err(ApiError::UnsupportedMediaType)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn typed(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn json_with_charset_is_accepted() {
        assert!(check_content_type(&Method::POST, &typed("application/json; charset=utf-8")).is_ok());
    }

    #[test]
    fn text_plain_is_rejected_on_writes() {
        assert!(check_content_type(&Method::POST, &typed("text/plain")).is_err());
        assert!(check_content_type(&Method::PUT, &typed("text/plain")).is_err());
    }

    #[test]
    fn missing_header_is_rejected_on_writes() {
        assert!(check_content_type(&Method::POST, &HeaderMap::new()).is_err());
    }

    #[test]
    fn reads_are_not_checked() {
        assert!(check_content_type(&Method::GET, &typed("text/plain")).is_ok());
    }
}
