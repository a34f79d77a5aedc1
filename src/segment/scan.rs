//! Segment boundary search.
//!
//! Both helpers work on raw bytes. `/` is ASCII, so every index they return
//! is a valid `str` slice boundary.

/// Separator between path segments.
pub const SEPARATOR: u8 = b'/';

/// Returns the first index at or after `start` holding a separator, or
/// `path.len()` if there is none.
///
/// A separator at `start` itself is returned unchanged, which yields an empty
/// segment for doubled separators.
pub fn scan_forward(path: &[u8], start: usize) -> usize {
    let start = start.min(path.len());
    path[start..]
        .iter()
        .position(|&b| b == SEPARATOR)
        .map_or(path.len(), |offset| start + offset)
}

/// Returns the last separator index strictly below `origin`, clamped to `0`.
///
/// Index `0` is never inspected: the scan stops there whether or not it holds
/// a separator.
pub fn scan_backward(path: &[u8], origin: usize) -> usize {
    let origin = origin.min(path.len());
    if origin <= 1 {
        return 0;
    }
    path[1..origin]
        .iter()
        .rposition(|&b| b == SEPARATOR)
        .map_or(0, |offset| offset + 1)
}
