//! Logger module
//!
//! Provides logging utilities for the fixture server including:
//! - Server lifecycle logging
//! - Per-request lines and access logging with multiple formats
//! - Error and warning logging
//!
//! Info lines go to stdout, warnings and errors to stderr. Each line is a
//! single `println!`/`eprintln!` call so concurrent tasks never interleave
//! within a line.

mod format;

pub use format::AccessLogEntry;

use crate::config::Config;
use crate::routing::RouteTable;
use std::net::SocketAddr;
use std::sync::OnceLock;

/// Verbosity threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    /// Parse a level name; unknown names fall back to `Info`
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "error" => Self::Error,
            "warn" | "warning" => Self::Warn,
            "debug" | "trace" => Self::Debug,
            _ => Self::Info,
        }
    }
}

static LEVEL: OnceLock<LogLevel> = OnceLock::new();

/// Initialize the logger with configuration
///
/// Should be called once at application startup. Later calls are ignored.
pub fn init(config: &Config) {
    let _ = LEVEL.set(LogLevel::parse(&config.logging.level));
}

fn enabled(level: LogLevel) -> bool {
    level <= *LEVEL.get().unwrap_or(&LogLevel::Info)
}

/// Write to info log
fn write_info(message: &str) {
    if enabled(LogLevel::Info) {
        println!("{message}");
    }
}

/// Write to error log
fn write_error(message: &str) {
    eprintln!("{message}");
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, routes: &RouteTable) {
    write_info("======================================");
    write_info("🔴 Vulnerable Shopify mock server started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    write_info("Fixture routes (first match wins):");
    for route in routes.routes() {
        write_info(&format!("  - {:<14} {}", route.name, route.matcher));
    }
    write_info("  - index          (anything else)");
    write_info("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    if enabled(LogLevel::Debug) {
        println!("[Connection] Accepted from: {peer_addr}");
    }
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    if enabled(LogLevel::Warn) {
        write_error(&format!("[WARN] {message}"));
    }
}

/// Raw request target, logged before the fixture is chosen
pub fn log_request(target: &str) {
    write_info(&format!("[Request] {target}"));
}

pub fn log_open_redirect(target: &str) {
    write_info(&format!("[Redirect] Open redirect to: {target}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}

pub fn log_shutdown() {
    write_info("\n[Shutdown] Interrupt received, stopping server");
}
