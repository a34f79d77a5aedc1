//! Path segment tokenization.
//!
//! # Data Flow
//! ```text
//! Raw request path + mount prefix
//!     → cursor.rs (PathCursor::new strips the prefix)
//!     → extract / retract      (peel or restore one segment)
//!     → consume / restore      (speculative match, rolled back on mismatch)
//!     → capture                (named extraction into caller-owned Params)
//! ```
//!
//! # Design Decisions
//! - One cursor per match attempt, never cloned
//! - Borrowed slices only, no allocation after construction
//! - No errors: every operation is total
//! - `at_end` is true one character early (trailing `/` reads as exhausted)

pub mod cursor;
pub mod scan;

pub use cursor::{Params, PathCursor};
