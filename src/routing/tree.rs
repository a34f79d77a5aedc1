//! Segment trie with backtracking resolution.
//!
//! # Responsibilities
//! - Store parsed patterns as a trie keyed by segment
//! - Detect routes that would land on the same node
//! - Walk a `PathCursor` down the trie, retrying alternatives on dead ends
//!
//! # Design Decisions
//! - Static children are tried before the parameter child
//! - Backtracking relies on the cursor's rollback, not on saved offsets
//! - A failed walk leaves the cursor and the params store as it found them

use thiserror::Error;

use crate::routing::pattern::PatternSegment;
use crate::segment::{Params, PathCursor};

/// Errors produced while inserting into a [`RouteTree`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsertError {
    /// Another route already terminates at this node.
    #[error("pattern collides with route #{existing}")]
    Conflict { existing: usize },

    /// Two parameter names compete for the same position.
    #[error("parameter `{name}` conflicts with `{existing}` at the same position")]
    ParamConflict { name: String, existing: String },
}

#[derive(Debug, Default)]
struct Node {
    statics: Vec<(String, Node)>,
    param: Option<(String, Box<Node>)>,
    route: Option<usize>,
}

impl Node {
    fn resolve(&self, cursor: &mut PathCursor, params: &mut Params) -> Option<usize> {
        if cursor.at_end() {
            return self.route;
        }

        for (literal, child) in &self.statics {
            if !cursor.consume(literal) {
                continue;
            }
            if let Some(route) = child.resolve(cursor, params) {
                return Some(route);
            }
            tracing::trace!(segment = %literal, "static branch dead end, backtracking");
            let undone = cursor.restore(literal);
            debug_assert!(undone, "restore must undo the consumed literal");
        }

        if let Some((name, child)) = &self.param {
            let captured = params.len();
            cursor.capture(name, params);
            if params.len() > captured {
                if let Some(route) = child.resolve(cursor, params) {
                    return Some(route);
                }
                tracing::trace!(param = %name, "param branch dead end, backtracking");
                params.remove(name);
            }
            cursor.retract();
        }

        None
    }
}

/// A trie of route patterns mapping to route indices.
#[derive(Debug, Default)]
pub struct RouteTree {
    root: Node,
    len: usize,
}

impl RouteTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of routes stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no route has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a parsed pattern that resolves to `route`.
    pub fn insert(&mut self, segments: &[PatternSegment], route: usize) -> Result<(), InsertError> {
        let mut node = &mut self.root;

        for segment in segments {
            node = match segment {
                PatternSegment::Static(literal) => {
                    let index = match node.statics.iter().position(|(l, _)| l == literal) {
                        Some(index) => index,
                        None => {
                            node.statics.push((literal.clone(), Node::default()));
                            node.statics.len() - 1
                        }
                    };
                    &mut node.statics[index].1
                }
                PatternSegment::Param(name) => {
                    let (existing, child) = node
                        .param
                        .get_or_insert_with(|| (name.clone(), Box::default()));
                    if *existing != *name {
                        return Err(InsertError::ParamConflict {
                            name: name.clone(),
                            existing: existing.clone(),
                        });
                    }
                    &mut **child
                }
            };
        }

        if let Some(existing) = node.route {
            return Err(InsertError::Conflict { existing });
        }
        node.route = Some(route);
        self.len += 1;
        Ok(())
    }

    /// Resolve the remainder of `cursor` to a route index.
    ///
    /// Parameters are written into `params`. When nothing matches, the
    /// cursor and `params` are returned to their state on entry.
    pub fn resolve(&self, cursor: &mut PathCursor, params: &mut Params) -> Option<usize> {
        self.root.resolve(cursor, params)
    }
}
