//! Segment-based path router.
//!
//! The core is [`segment::PathCursor`], a stateful cursor over a
//! slash-delimited path with speculative match and rollback. The routing
//! trie drives one cursor per lookup and uses that rollback to backtrack
//! from static branches into parameter branches.

pub mod config;
pub mod observability;
pub mod routing;
pub mod segment;

pub use config::schema::RouterConfig;
pub use routing::{RouteMatch, Router};
pub use segment::{Params, PathCursor};
