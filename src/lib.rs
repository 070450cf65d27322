//! Deterministic mock Shopify backend for exercising vulnerability scanners.
//!
//! Every request is mapped onto one canned, deliberately insecure response
//! (leaked secrets, unauthenticated PII, open redirect, fingerprinting
//! headers). See [`routing::RouteTable::standard`] for the catalogue order.

pub mod config;
pub mod fixtures;
pub mod handler;
pub mod http;
pub mod logger;
pub mod routing;
pub mod server;
