//! Routing module
//!
//! Maps a request's path and query onto exactly one fixture:
//! - Exact, suffix and prefix path predicates
//! - Query parameter presence predicates
//! - An ordered table with a fallback responder

mod matcher;
mod query;
mod table;

pub use matcher::RouteMatch;
pub use query::QueryParams;
pub use table::{Responder, Route, RouteTable};

/// The parts of a request the dispatcher looks at
#[derive(Debug, Clone, Copy)]
pub struct RequestView<'a> {
    /// Raw (not percent-decoded) request path
    pub path: &'a str,
    pub query: &'a QueryParams,
}
