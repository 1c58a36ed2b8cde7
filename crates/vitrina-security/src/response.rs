//! Standard rejection response for governed requests.

use std::time::Duration;

use http::header::{CONTENT_TYPE, RETRY_AFTER};
use http::{HeaderValue, Response, StatusCode};

/// Build a `429 Too Many Requests` response with a `Retry-After` hint.
///
/// The hint is the window length rounded up to whole seconds, since the
/// client's oldest timestamp ages out at most one window from now.
pub fn too_many_requests_response(window: Duration) -> Response<String> {
    let body = serde_json::json!({
        "success": false,
        "message": "Demasiadas solicitudes. Intenta de nuevo más tarde.",
    })
    .to_string();

    let retry_after_secs = window.as_secs().max(1);

    let mut response = Response::new(body);
    *response.status_mut() = StatusCode::TOO_MANY_REQUESTS;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
        .headers_mut()
        .insert(RETRY_AFTER, HeaderValue::from(retry_after_secs));
    response
}
