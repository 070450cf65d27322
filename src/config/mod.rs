// Configuration module entry point
// Manages process configuration and the shared application state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, PerformanceConfig, ServerConfig};

/// Default config file name (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from specified file path (without extension)
    ///
    /// Sources, later overriding earlier: built-in defaults, the file (if it
    /// exists), then `SERVER_*` environment variables such as
    /// `SERVER_SERVER__PORT=7000`.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("SERVER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 6000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    // Serializes tests that read or set `SERVER_*` environment variables
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_guard() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn load_defaults() -> Config {
        Config::load_from("no-such-config-file-for-tests").unwrap()
    }

    #[test]
    fn test_defaults_without_file() {
        let _guard = env_guard();
        let cfg = load_defaults();
        assert_eq!(cfg.server.port, 6000);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert!(cfg.server.workers.is_none());
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert_eq!(cfg.performance.keep_alive_timeout, 75);
        assert!(cfg.performance.max_connections.is_none());
    }

    #[test]
    fn test_default_socket_addr() {
        let _guard = env_guard();
        let addr = load_defaults().get_socket_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:6000");
    }

    #[test]
    fn test_env_overrides_nested_key() {
        let _guard = env_guard();
        std::env::set_var("SERVER_SERVER__PORT", "7000");
        let result = Config::load_from("no-such-config-file-for-tests");
        std::env::remove_var("SERVER_SERVER__PORT");
        assert_eq!(result.unwrap().server.port, 7000);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let _guard = env_guard();
        let stem = std::env::temp_dir().join(format!("vulnshop-config-{}", std::process::id()));
        let file = stem.with_extension("toml");
        std::fs::write(
            &file,
            "[server]\nport = 7100\n\n[logging]\naccess_log_format = \"json\"\n\n[performance]\nkeep_alive_timeout = 0\nmax_connections = 16\n",
        )
        .unwrap();

        let result = Config::load_from(stem.to_str().unwrap());
        std::fs::remove_file(&file).unwrap();
        let cfg = result.unwrap();

        assert_eq!(cfg.server.port, 7100);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.logging.access_log_format, "json");
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.performance.keep_alive_timeout, 0);
        assert_eq!(cfg.performance.max_connections, Some(16));
        assert_eq!(cfg.performance.read_timeout, 30);
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let mut cfg = load_defaults();
        cfg.server.host = "not a host".to_string();
        let err = cfg.get_socket_addr().unwrap_err();
        assert!(err.starts_with("Invalid address"));
    }

    #[test]
    fn test_connection_timeout_takes_larger_value() {
        let mut cfg = load_defaults();
        cfg.performance.read_timeout = 5;
        cfg.performance.write_timeout = 12;
        assert_eq!(cfg.performance.connection_timeout().as_secs(), 12);
    }
}
