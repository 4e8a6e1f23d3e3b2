//! Application configuration for the Textflow server.

use std::time::Duration;

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// Environment variables are prefixed with `TEXTFLOW_`:
/// - `TEXTFLOW_HOST`: Server bind address (default: "0.0.0.0")
/// - `TEXTFLOW_PORT`: Server port (default: 8090)
/// - `TEXTFLOW_DEBUG`: Enable debug mode (default: false)
/// - `TEXTFLOW_HISTORY_LIMIT`: Number of runs kept in history (default: 20)
/// - `TEXTFLOW_STEP_TIMEOUT_SECS`: Upper bound for one step (default: 60)
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable debug mode
    #[serde(default)]
    pub debug: bool,

    /// Maximum number of runs kept in history
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Upper bound on a single transform call, in seconds
    #[serde(default = "default_step_timeout_secs")]
    pub step_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

fn default_history_limit() -> usize {
    20
}

fn default_step_timeout_secs() -> u64 {
    60
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `TEXTFLOW_`.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("TEXTFLOW_").from_env::<AppConfig>()
    }

    /// Get the server bind address as a string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn step_timeout(&self) -> Duration {
        Duration::from_secs(self.step_timeout_secs.max(1))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
            history_limit: default_history_limit(),
            step_timeout_secs: default_step_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8090);
        assert_eq!(config.history_limit, 20);
        assert!(!config.debug);
    }

    #[test]
    fn test_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8090");
    }

    #[test]
    fn test_step_timeout_never_zero() {
        let config = AppConfig {
            step_timeout_secs: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.step_timeout(), Duration::from_secs(1));
    }
}
