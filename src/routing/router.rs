//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled routes
//! - Look up matching route for a request path
//! - Return matched route or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - One `PathCursor` per lookup, owned by `resolve` for its duration
//! - Explicit NoMatch rather than silent default

use serde::Serialize;
use thiserror::Error;

use crate::config::schema::{RouteConfig, RouterConfig};
use crate::routing::pattern::{parse_pattern, ParseError};
use crate::routing::tree::{InsertError, RouteTree};
use crate::segment::{Params, PathCursor};

/// Errors produced while building a [`Router`].
#[derive(Debug, Error)]
pub enum RouterError {
    #[error("route `{route}`: {source}")]
    Pattern { route: String, source: ParseError },

    #[error("route `{route}`: {source}")]
    Insert { route: String, source: InsertError },
}

/// A compiled route.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    pub name: String,
    pub pattern: String,
    pub handler: String,
}

/// Result of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    /// Name of the matched route.
    pub route: String,
    /// Handler to dispatch to.
    pub handler: String,
    /// Captured path parameters.
    pub params: Params,
}

/// Path router over a fixed route table.
#[derive(Debug)]
pub struct Router {
    mount_prefix: String,
    routes: Vec<Route>,
    tree: RouteTree,
}

impl Router {
    /// Build a router from a validated configuration.
    pub fn from_config(config: &RouterConfig) -> Result<Self, RouterError> {
        Self::new(&config.mount_prefix, &config.routes)
    }

    /// Build a router from a mount prefix and route list.
    pub fn new(mount_prefix: &str, routes: &[RouteConfig]) -> Result<Self, RouterError> {
        let mut tree = RouteTree::new();
        let mut compiled = Vec::with_capacity(routes.len());

        for (index, route) in routes.iter().enumerate() {
            let segments = parse_pattern(&route.pattern).map_err(|source| RouterError::Pattern {
                route: route.name.clone(),
                source,
            })?;
            tree.insert(&segments, index)
                .map_err(|source| RouterError::Insert {
                    route: route.name.clone(),
                    source,
                })?;
            compiled.push(Route {
                name: route.name.clone(),
                pattern: route.pattern.clone(),
                handler: route.handler.clone(),
            });
        }

        if tree.is_empty() {
            tracing::warn!("Router built with no routes; every path will miss");
        }
        tracing::info!(
            routes = compiled.len(),
            mount_prefix = %mount_prefix,
            "Router built"
        );

        Ok(Self {
            mount_prefix: mount_prefix.to_string(),
            routes: compiled,
            tree,
        })
    }

    /// Compiled routes in configuration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Literal prefix every routable path must start with.
    pub fn mount_prefix(&self) -> &str {
        &self.mount_prefix
    }

    /// Resolve a request path to a route.
    ///
    /// Paths outside the mount prefix never match. Only the leading prefix
    /// is removed before the trie walk.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let Some(mounted) = self.unmount(path) else {
            tracing::debug!(path = %path, mount_prefix = %self.mount_prefix, "Path outside mount prefix");
            return None;
        };

        let mut cursor = PathCursor::new(mounted, "");
        let mut params = Params::new();

        let Some(index) = self.tree.resolve(&mut cursor, &mut params) else {
            tracing::debug!(path = %path, "No route matched");
            return None;
        };

        let route = &self.routes[index];
        tracing::debug!(path = %path, route = %route.name, params = ?params, "Route matched");

        Some(RouteMatch {
            route: route.name.clone(),
            handler: route.handler.clone(),
            params,
        })
    }

    /// The part of `path` below the mount prefix.
    ///
    /// The prefix must end on a segment boundary: `/api` mounts `/api` and
    /// `/api/...` but not `/apix`.
    fn unmount<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.mount_prefix.is_empty() {
            return Some(path);
        }
        let rest = path.strip_prefix(self.mount_prefix.as_str())?;
        (rest.is_empty() || rest.starts_with('/')).then_some(rest)
    }
}
