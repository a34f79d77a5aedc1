//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Configure log level from config, overridable by `RUST_LOG`
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for production, pretty format for development
//! - Initialization is idempotent: a second call is a no-op

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::schema::{LogFormat, ObservabilityConfig};

/// Install the global subscriber. Returns false if one was already set.
pub fn init_logging(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.log_level)));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.log_format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };
    result.is_ok()
}

fn default_directive(level: &str) -> String {
    format!("segment_router={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive("debug"), "segment_router=debug");
    }

    #[test]
    fn test_second_init_is_noop() {
        let config = ObservabilityConfig::default();
        init_logging(&config);
        assert!(!init_logging(&config));
    }
}
