//! Structured logging for the route query service.
//!
//! # Environment Variables
//!
//! - `LOG_FORMAT`: Output format, either `json` (default) or `text`
//! - `RUST_LOG`: Log level filter (default: `info`)
//! - `SERVICE_NAME`: Service name attached to the startup log entry
//!
//! # Example
//!
//! ```no_run
//! use airroute_service_shared::logging::{init_logging, LoggingConfig};
//!
//! let config = LoggingConfig::from_env();
//! init_logging(&config);
//! ```

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON structured logging (default, production).
    #[default]
    Json,
    /// Human-readable text logging (development).
    Text,
}

impl LogFormat {
    /// Parse a log format name.
    ///
    /// Accepts "json", "text", or "pretty" (alias for text), case-insensitively.
    /// Any other value selects `Json`.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "text" | "pretty" => LogFormat::Text,
            _ => LogFormat::Json,
        }
    }
}

/// Configuration for the logging system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Fallback filter used when `RUST_LOG` is unset or invalid.
    pub level: String,
    pub service: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Json,
            level: "info".to_string(),
            service: None,
        }
    }
}

impl LoggingConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = lookup("LOG_FORMAT")
            .map(|value| LogFormat::parse(&value))
            .unwrap_or_default();
        let level = lookup("RUST_LOG").unwrap_or_else(|| "info".to_string());
        let service = lookup("SERVICE_NAME");

        Self {
            format,
            level,
            service,
        }
    }

    /// Set the service name unless one was configured already.
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        if self.service.is_none() {
            self.service = Some(service.into());
        }
        self
    }
}

/// Install the global tracing subscriber.
///
/// Must be called once at startup; a second call panics because a global
/// subscriber is already set.
///
/// # JSON Format (default)
///
/// ```json
/// {"timestamp":"2026-01-05T10:00:00Z","level":"INFO","fields":{"message":"network loaded"},"target":"airroute_lib::network"}
/// ```
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Text => {
            registry.with(fmt::layer().pretty()).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false);
            registry.with(json_layer).init();
        }
    }

    tracing::debug!(
        service = config.service.as_deref().unwrap_or("airroute"),
        format = ?config.format,
        "logging initialized"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("TEXT"), LogFormat::Text);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Text);
        assert_eq!(LogFormat::parse("unknown"), LogFormat::Json);
    }

    #[test]
    fn test_logging_config_defaults_without_env() {
        let config = LoggingConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "info");
        assert!(config.service.is_none());
    }

    #[test]
    fn test_logging_config_reads_variables() {
        let config = LoggingConfig::from_lookup(lookup_from(&[
            ("LOG_FORMAT", "text"),
            ("RUST_LOG", "airroute_lib=debug"),
            ("SERVICE_NAME", "route-eu"),
        ]));
        assert_eq!(config.format, LogFormat::Text);
        assert_eq!(config.level, "airroute_lib=debug");
        assert_eq!(config.service.as_deref(), Some("route-eu"));
    }

    #[test]
    fn test_with_service_keeps_configured_name() {
        let configured = LoggingConfig::from_lookup(lookup_from(&[("SERVICE_NAME", "custom")]))
            .with_service("route");
        assert_eq!(configured.service.as_deref(), Some("custom"));

        let defaulted = LoggingConfig::default().with_service("route");
        assert_eq!(defaulted.service.as_deref(), Some("route"));
    }
}
