//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every pattern parses
//! - Detect duplicate route names and conflicting patterns
//! - Check the mount prefix shape
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Conflicts are found by inserting into a trial tree, the same way the
//!   router will at build time

use std::collections::HashMap;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::routing::pattern::{parse_pattern, ParseError};
use crate::routing::tree::{InsertError, RouteTree};

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("route name `{0}` is used more than once")]
    DuplicateName(String),

    #[error("route `{0}` has an empty handler")]
    EmptyHandler(String),

    #[error("route `{route}`: {source}")]
    InvalidPattern { route: String, source: ParseError },

    #[error("route `{route}` conflicts with route `{existing}`")]
    Conflict { route: String, existing: String },

    #[error("route `{route}`: {source}")]
    ParamConflict { route: String, source: InsertError },

    #[error("mount prefix `{0}` must start with `/` and must not end with `/`")]
    InvalidMountPrefix(String),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let prefix = &config.mount_prefix;
    if !prefix.is_empty() && (!prefix.starts_with('/') || prefix.ends_with('/')) {
        errors.push(ValidationError::InvalidMountPrefix(prefix.clone()));
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut tree = RouteTree::new();

    for (index, route) in config.routes.iter().enumerate() {
        if route.name.is_empty() {
            errors.push(ValidationError::EmptyName { index });
        } else if seen.insert(&route.name, index).is_some() {
            errors.push(ValidationError::DuplicateName(route.name.clone()));
        }

        if route.handler.is_empty() {
            errors.push(ValidationError::EmptyHandler(route.name.clone()));
        }

        let segments = match parse_pattern(&route.pattern) {
            Ok(segments) => segments,
            Err(source) => {
                errors.push(ValidationError::InvalidPattern {
                    route: route.name.clone(),
                    source,
                });
                continue;
            }
        };

        match tree.insert(&segments, index) {
            Ok(()) => {}
            Err(InsertError::Conflict { existing }) => {
                errors.push(ValidationError::Conflict {
                    route: route.name.clone(),
                    existing: config.routes[existing].name.clone(),
                });
            }
            Err(source) => {
                errors.push(ValidationError::ParamConflict {
                    route: route.name.clone(),
                    source,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
