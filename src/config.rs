//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::response::ErrorDetail;

/// Default cached-answer lifetime in seconds
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60;

/// Sweep interval as a multiple of the cache TTL
pub const CLEANUP_TTL_MULTIPLIER: u64 = 5;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface the HTTP server binds to
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,
    /// Lifetime of a cached answer in seconds
    pub cache_ttl: u64,
    /// Background sweep interval in seconds
    pub cleanup_interval: u64,
    /// Per-request timeout in seconds
    pub request_timeout: u64,
    /// Whether internal error text is passed through to clients
    pub expose_error_details: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_HOST` - Bind address (default: 127.0.0.1)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `CACHE_TTL_SECS` - Cached answer lifetime in seconds (default: 60)
    /// - `CLEANUP_INTERVAL_SECS` - Sweep frequency in seconds (default: 5x the TTL)
    /// - `REQUEST_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    /// - `EXPOSE_ERROR_DETAILS` - Pass error text to clients (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let cache_ttl = env_or("CACHE_TTL_SECS", defaults.cache_ttl);

        Self {
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cache_ttl,
            cleanup_interval: env_or(
                "CLEANUP_INTERVAL_SECS",
                cache_ttl.saturating_mul(CLEANUP_TTL_MULTIPLIER).max(1),
            ),
            request_timeout: env_or("REQUEST_TIMEOUT_SECS", defaults.request_timeout),
            expose_error_details: env_or("EXPOSE_ERROR_DETAILS", defaults.expose_error_details),
        }
    }

    /// Cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Sweep interval as a Duration.
    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval)
    }

    /// Request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Error verbosity policy derived from `expose_error_details`.
    pub fn error_detail(&self) -> ErrorDetail {
        if self.expose_error_details {
            ErrorDetail::Verbose
        } else {
            ErrorDetail::Generic
        }
    }

    /// `host:port` string for binding the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            cache_ttl: DEFAULT_CACHE_TTL_SECS,
            cleanup_interval: DEFAULT_CACHE_TTL_SECS * CLEANUP_TTL_MULTIPLIER,
            request_timeout: 10,
            expose_error_details: true,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
