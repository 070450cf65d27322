//! HTTP protocol layer module
//!
//! Converts fixture payloads into hyper responses, decoupled from routing.

pub mod response;

// Re-export commonly used builders
pub use response::{build_405_response, build_fixture_response};
