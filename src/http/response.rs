//! HTTP response building module
//!
//! Turns fixtures into hyper responses and provides the few protocol-level
//! responses the handler needs on its own.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::fixtures::FixtureResponse;

/// Build a response from a fixture.
///
/// HEAD requests get the same status and headers with an empty body.
pub fn build_fixture_response(fixture: FixtureResponse, is_head: bool) -> Response<Full<Bytes>> {
    let status = fixture.status;
    let content_length = fixture.body.len();

    let mut builder = Response::builder().status(status);
    if let Some(content_type) = fixture.content_type {
        builder = builder.header("Content-Type", content_type);
    }
    for (name, value) in &fixture.headers {
        builder = builder.header(*name, value.as_str());
    }
    builder = builder.header("Content-Length", content_length);

    let body = if is_head { Bytes::new() } else { fixture.body };

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        log_build_error(&status.to_string(), &e);
        build_bare_response(status)
    })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Empty response carrying only the status code
fn build_bare_response(status: u16) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::new()));
    *response.status_mut() = StatusCode::from_u16(status).unwrap_or(StatusCode::OK);
    response
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
