//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RouterConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<RouterConfig, ConfigError> {
    let config: RouterConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogFormat;

    #[test]
    fn test_parse_minimal() {
        let config = parse_config("").unwrap();
        assert!(config.routes.is_empty());
        assert_eq!(config.mount_prefix, "");
        assert_eq!(config.observability.log_level, "info");
        assert_eq!(config.observability.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_parse_routes() {
        let config = parse_config(
            r#"
            mount_prefix = "/api"

            [observability]
            log_level = "debug"
            log_format = "json"

            [[routes]]
            name = "user"
            pattern = "/users/:id"
            handler = "users.show"
            "#,
        )
        .unwrap();

        assert_eq!(config.mount_prefix, "/api");
        assert_eq!(config.routes.len(), 1);
        assert_eq!(config.routes[0].handler, "users.show");
        assert_eq!(config.observability.log_format, LogFormat::Json);
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("routes = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_lists_all() {
        let err = parse_config(
            r#"
            [[routes]]
            name = ""
            pattern = "users"
            handler = "h"
            "#,
        )
        .unwrap_err();

        let ConfigError::Validation(errors) = &err else {
            panic!("expected validation error, got {err:?}");
        };
        assert_eq!(errors.len(), 2);
        assert!(err.to_string().starts_with("Validation failed: "));
        assert!(err.to_string().contains(", "));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/router.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
