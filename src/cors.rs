//! CORS headers for the configured frontend origin.

use axum::http::{
    header::{
        ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
        ACCESS_CONTROL_ALLOW_ORIGIN,
    },
    HeaderMap, HeaderValue,
};

const ALLOW_METHODS: &str = "GET,OPTIONS,PATCH,DELETE,POST,PUT";
const ALLOW_HEADERS: &str = "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, \
Content-MD5, Content-Type, Date, X-Api-Version, Authorization";

/// Whether `origin` can be sent as a header value. `Settings::from_lookup` rejects origins that cannot.
pub fn is_valid_origin(origin: &str) -> bool {
    HeaderValue::from_str(origin).is_ok()
}

/// Headers allowing `frontend_url` to call the API with credentials. Empty when no origin is configured,
/// or when the origin is not a valid header value.
pub fn cors_headers(frontend_url: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let Some(origin) = frontend_url else {
        return headers;
    };
    let Ok(origin) = HeaderValue::from_str(origin) else {
        tracing::warn!(origin, "frontend origin is not a valid header value; CORS headers omitted");
        return headers;
    };
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    headers.insert(ACCESS_CONTROL_ALLOW_CREDENTIALS, HeaderValue::from_static("true"));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS));
    headers
}
