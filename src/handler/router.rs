//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: logs the raw target, gates the
//! method, hands path and query to the fixture table and writes the access log.

use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::routing::{QueryParams, RequestView};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::net::SocketAddr;
use std::time::Instant;

/// Main entry point for HTTP request handling
///
/// Generic over the request body since fixtures never read it.
pub fn handle_request<B>(
    req: &Request<B>,
    state: &AppState,
    peer_addr: SocketAddr,
) -> Response<Full<Bytes>> {
    let started = Instant::now();
    let method = req.method();
    let uri = req.uri();

    // 1. Log the raw target before anything else
    logger::log_request(
        uri.path_and_query()
            .map_or_else(|| uri.path(), |pq| pq.as_str()),
    );

    // 2. Check HTTP method, then dispatch
    let response = match *method {
        Method::GET | Method::HEAD => {
            let query = QueryParams::parse(uri.query().unwrap_or(""));
            let view = RequestView {
                path: uri.path(),
                query: &query,
            };
            let fixture = state.routes.dispatch(&view);
            http::build_fixture_response(fixture, *method == Method::HEAD)
        }
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            http::build_405_response()
        }
    };

    // 3. Access log
    if state.config.logging.access_log {
        let entry = access_log_entry(req, &response, peer_addr, started);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    response
}

fn access_log_entry<B>(
    req: &Request<B>,
    response: &Response<Full<Bytes>>,
    peer_addr: SocketAddr,
    started: Instant,
) -> AccessLogEntry {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = match req.version() {
        hyper::Version::HTTP_10 => "1.0",
        hyper::Version::HTTP_2 => "2",
        _ => "1.1",
    }
    .to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    entry.referer = header("referer");
    entry.user_agent = header("user-agent");
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}
