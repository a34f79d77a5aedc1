//! Stateful cursor over a slash-delimited path.
//!
//! # Responsibilities
//! - Hold the working path and the boundary between consumed and unconsumed
//! - Peel segments off the front (`extract`) and put them back (`retract`)
//! - Speculative `consume` / `restore` that leave no trace on mismatch
//! - Write named segments into a caller-owned store (`capture`)
//!
//! # Design Decisions
//! - Not `Clone`: copies would silently diverge in position
//! - Position is a byte offset; it only ever rests on `0`, a separator, or the end
//! - The capture store is passed in, never owned

use std::collections::HashMap;
use std::fmt;
use std::ops::Range;

use crate::segment::scan::{scan_backward, scan_forward};

/// Captured route parameters, keyed by parameter name.
pub type Params = HashMap<String, String>;

/// Path substituted for empty input.
const ROOT: &str = "/";

/// A cursor over the segments of a single request path.
pub struct PathCursor {
    path: String,
    size: usize,
    position: usize,
}

impl PathCursor {
    /// Create a cursor over `path` with every occurrence of `strip` removed.
    ///
    /// An empty path, or one that stripping empties, becomes `"/"`.
    pub fn new(path: &str, strip: &str) -> Self {
        let path = if path.is_empty() { ROOT } else { path };
        let mut path = if strip.is_empty() {
            path.to_owned()
        } else {
            path.replace(strip, "")
        };
        if path.is_empty() {
            path.push_str(ROOT);
        }

        Self {
            size: path.len(),
            path,
            position: 0,
        }
    }

    /// The unconsumed remainder, including any leading separator.
    pub fn current(&self) -> &str {
        &self.path[self.position..self.size]
    }

    /// Everything consumed so far.
    pub fn previous(&self) -> &str {
        &self.path[..self.position]
    }

    /// The full working path after prefix stripping.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Length of the working path in bytes.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the working path is empty. Construction substitutes `"/"` for
    /// an empty path, so this never holds for a constructed cursor.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// True when at most one character remains.
    ///
    /// A lone trailing `/`, or the bare root path, counts as exhausted.
    pub fn at_end(&self) -> bool {
        self.size <= self.position + 1
    }

    /// True when nothing has been consumed.
    pub fn at_start(&self) -> bool {
        self.position == 0
    }

    /// Peel the next segment off the front.
    ///
    /// Returns `""` without moving once [`at_end`](Self::at_end) holds.
    pub fn extract(&mut self) -> &str {
        let span = self.advance();
        &self.path[span]
    }

    /// Put back the most recently extracted segment.
    ///
    /// Returns `""` without moving once [`at_start`](Self::at_start) holds.
    pub fn retract(&mut self) -> &str {
        let span = self.retreat();
        &self.path[span]
    }

    /// Extract the next segment if it equals `expected`.
    ///
    /// On mismatch the cursor is left where it was.
    pub fn consume(&mut self, expected: &str) -> bool {
        self.speculate(expected, Self::advance)
    }

    /// Retract the previous segment if it equals `expected`.
    ///
    /// On mismatch the cursor is left where it was.
    pub fn restore(&mut self, expected: &str) -> bool {
        self.speculate(expected, Self::retreat)
    }

    /// Extract the next segment and store it under `key` if non-empty.
    ///
    /// An empty segment leaves `store` untouched. The cursor still advances
    /// past a doubled separator.
    pub fn capture(&mut self, key: &str, store: &mut Params) {
        let value = self.extract();
        if !value.is_empty() {
            store.insert(key.to_owned(), value.to_owned());
        }
    }

    fn advance(&mut self) -> Range<usize> {
        if self.at_end() {
            return self.position..self.position;
        }
        let offset = self.step_over(self.position);
        self.position = scan_forward(self.path.as_bytes(), offset);
        offset..self.position
    }

    fn retreat(&mut self) -> Range<usize> {
        if self.at_start() {
            return 0..0;
        }
        let origin = self.position;
        self.position = scan_backward(self.path.as_bytes(), origin);
        self.step_over(self.position)..origin
    }

    /// Run one movement and keep it only if it produced `expected`.
    fn speculate(&mut self, expected: &str, step: fn(&mut Self) -> Range<usize>) -> bool {
        let origin = self.position;
        let span = step(self);
        if self.path[span] == *expected {
            return true;
        }
        self.position = origin;
        false
    }

    /// Index just past the character at `index`.
    ///
    /// For a separator this is `index + 1`. Other leading characters are
    /// skipped whole so no slice splits a code point.
    fn step_over(&self, index: usize) -> usize {
        self.path[index..]
            .chars()
            .next()
            .map_or(index, |c| index + c.len_utf8())
    }
}

impl fmt::Debug for PathCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathCursor")
            .field("previous", &self.previous())
            .field("current", &self.current())
            .finish()
    }
}
