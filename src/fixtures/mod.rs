//! Fixture catalogue
//!
//! Every response this server can produce is defined here. Bodies are
//! constants (or serialized from constant data) so repeated requests are
//! byte-identical; the only request-dependent fixture is the open redirect,
//! which echoes the caller's target into `Location` untouched.
//!
//! The embedded keys, tokens and hostnames are matched verbatim by scanner
//! test assertions. Do not edit them.

mod catalog;
mod pages;

use hyper::body::Bytes;

pub use catalog::{admin_orders, customers, products};
pub use pages::{constants_js, debug_info, env_file, index_page, open_redirect, REDIRECT_PARAMS};

/// A fully materialized canned response: status, content type, extra
/// headers and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureResponse {
    pub status: u16,
    pub content_type: Option<&'static str>,
    pub headers: Vec<(&'static str, String)>,
    pub body: Bytes,
}

impl FixtureResponse {
    /// 200 OK with the given content type and body
    pub fn ok(content_type: &'static str, body: impl Into<Bytes>) -> Self {
        Self {
            status: 200,
            content_type: Some(content_type),
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// 302 Found pointing at `location`, empty body
    pub fn found(location: &str) -> Self {
        Self {
            status: 302,
            content_type: None,
            headers: vec![("Location", location.to_string())],
            body: Bytes::new(),
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }

    /// First header with the given name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Body as UTF-8 text, if it is valid UTF-8
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}
