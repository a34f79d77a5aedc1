//! Configuration schema definitions.
//!
//! This module defines the route table and ambient settings for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Literal prefix stripped from every incoming path (e.g., "/api").
    /// Empty means routes are matched against the raw path.
    pub mount_prefix: String,

    /// Route definitions mapping path patterns to handlers.
    pub routes: Vec<RouteConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Route configuration mapping a path pattern to a handler.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RouteConfig {
    /// Route identifier for logging and match output.
    pub name: String,

    /// Path pattern, e.g. "/users/:id/posts".
    pub pattern: String,

    /// Handler name the dispatcher invokes on a match.
    pub handler: String,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output for development.
    #[default]
    Pretty,
    /// One JSON object per event for machine parsing.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
