//! Request handler module
//!
//! Responsible for taking a hyper request to a fixture response.

pub mod router;

// Re-export main entry point
pub use router::handle_request;
