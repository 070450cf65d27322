// Application state module
// Immutable runtime state shared by every connection task

use std::sync::atomic::AtomicUsize;

use super::types::Config;
use crate::routing::RouteTable;

/// Application state
///
/// Built once at startup and shared through an `Arc`. Nothing in here is
/// mutated per request except the connection counter.
pub struct AppState {
    pub config: Config,
    pub routes: RouteTable,
    pub active_connections: AtomicUsize,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            routes: RouteTable::standard(),
            active_connections: AtomicUsize::new(0),
        }
    }
}
