//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

use crate::error::{Result, ServiceError};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Address the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Name of the variable whose value `/` reports as `environment`.
    #[serde(default = "default_environment_var")]
    pub environment_var: String,

    // === Observability ===
    /// Port for the Prometheus exporter. Metrics are not exported when unset.
    #[serde(default)]
    pub metrics_port: Option<u16>,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_environment_var() -> String {
    "ENV".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment_var: default_environment_var(),
            metrics_port: None,
            rust_log: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Build configuration from explicit key/value pairs instead of the process environment.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter(vars)?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("HOST must not be empty".to_string());
        }

        if let Err(e) = self.host_ip() {
            return Err(e.to_string());
        }

        if self.port == 0 {
            return Err("PORT must be non-zero".to_string());
        }

        if self.environment_var.trim().is_empty() {
            return Err("ENVIRONMENT_VAR must not be empty".to_string());
        }

        if self.metrics_port == Some(self.port) {
            return Err(format!(
                "METRICS_PORT must differ from PORT ({})",
                self.port
            ));
        }

        Ok(())
    }

    /// Host parsed as an IPv4 or IPv6 literal.
    fn host_ip(&self) -> Result<IpAddr> {
        self.host
            .trim()
            .parse()
            .map_err(|e| ServiceError::InvalidConfig(format!("invalid HOST {:?}: {e}", self.host)))
    }

    /// Socket address for the HTTP server.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        Ok(SocketAddr::new(self.host_ip()?, self.port))
    }

    /// Socket address for the Prometheus exporter, if enabled.
    pub fn metrics_addr(&self) -> Result<Option<SocketAddr>> {
        self.metrics_port
            .map(|port| Ok(SocketAddr::new(self.host_ip()?, port)))
            .transpose()
    }
}
