//! Server configuration

use serde::{Deserialize, Serialize};

/// Listen address configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// TCP port to bind
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    /// Load configuration, letting `ALERT_FEED_HOST` / `ALERT_FEED_PORT`
    /// environment variables override the defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 5000)?
            .add_source(config::Environment::with_prefix("ALERT_FEED"))
            .build()?
            .try_deserialize()
    }

    /// Bind address in `host:port` form.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
