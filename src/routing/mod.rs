//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming path
//!     → router.rs (strip mount prefix, build PathCursor)
//!     → tree.rs (walk segments, backtrack on dead ends)
//!     → Return: RouteMatch (route, handler, params) or NoMatch
//!
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → pattern.rs (parse into static / param segments)
//!     → tree.rs (insert, reject conflicts)
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path (segment comparison only)
//! - Deterministic: static segments win over parameters
//! - Parameters never capture an empty segment

pub mod pattern;
pub mod router;
pub mod tree;

pub use router::{Route, RouteMatch, Router, RouterError};
