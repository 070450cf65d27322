//! Ordered fixture route table
//!
//! Routes are evaluated top to bottom and the first match wins, so exact
//! paths beat the suffix/prefix rules, which beat the redirect query check,
//! which beats the fallback index page.

use std::fmt;

use super::{RequestView, RouteMatch};
use crate::fixtures::{self, FixtureResponse};

/// Produces the response for a matched route
pub type Responder = fn(&RequestView<'_>) -> FixtureResponse;

/// A single (predicate, generator) pair
#[derive(Clone, Copy)]
pub struct Route {
    pub name: &'static str,
    pub matcher: RouteMatch,
    pub responder: Responder,
}

impl Route {
    pub const fn new(name: &'static str, matcher: RouteMatch, responder: Responder) -> Self {
        Self {
            name,
            matcher,
            responder,
        }
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("name", &self.name)
            .field("matcher", &self.matcher)
            .finish_non_exhaustive()
    }
}

/// Routing table built once at startup
#[derive(Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    fallback: Responder,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>, fallback: Responder) -> Self {
        Self { routes, fallback }
    }

    /// The fixture catalogue in priority order
    pub fn standard() -> Self {
        Self::new(
            vec![
                Route::new("products", RouteMatch::Exact("/products.json"), |_| {
                    fixtures::products()
                }),
                Route::new("customers", RouteMatch::Exact("/customers.json"), |_| {
                    fixtures::customers()
                }),
                Route::new(
                    "admin_orders",
                    RouteMatch::Exact("/admin/orders.json"),
                    |_| fixtures::admin_orders(),
                ),
                Route::new("debug", RouteMatch::Exact("/debug"), |_| {
                    fixtures::debug_info()
                }),
                Route::new("env_file", RouteMatch::Suffix(".env"), |_| {
                    fixtures::env_file()
                }),
                Route::new(
                    "constants_js",
                    RouteMatch::Prefix("/assets/constants.js"),
                    |_| fixtures::constants_js(),
                ),
                Route::new(
                    "open_redirect",
                    RouteMatch::QueryParam(fixtures::REDIRECT_PARAMS),
                    fixtures::open_redirect,
                ),
            ],
            |_| fixtures::index_page(),
        )
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// First route matching the request, if any
    pub fn resolve(&self, req: &RequestView<'_>) -> Option<&Route> {
        self.routes.iter().find(|route| route.matcher.matches(req))
    }

    /// Produce exactly one response for the request
    pub fn dispatch(&self, req: &RequestView<'_>) -> FixtureResponse {
        self.resolve(req)
            .map_or(self.fallback, |route| route.responder)(req)
    }
}
