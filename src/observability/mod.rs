//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Router and config loader produce:
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → stderr, pretty or JSON
//! ```
//!
//! # Design Decisions
//! - Structured fields (`path`, `route`, `params`) rather than formatted text
//! - The path cursor never logs; only its callers do

pub mod logging;

pub use logging::init_logging;
