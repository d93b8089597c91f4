/// Maximum nesting depth accepted by the parser.
///
/// The top-level item is at depth 0; an item nested deeper than this is rejected with
/// [`ErrorCode::DepthLimitExceeded`](crate::ErrorCode::DepthLimitExceeded). This also bounds
/// recursion on the call stack.
pub const MAX_DEPTH: usize = 1000;

/// Upper bound on capacity pre-reserved from a declared array/map length.
///
/// A hostile header may declare up to `2^64 - 1` entries; accumulators never reserve more than
/// this many slots up front and grow normally afterwards.
pub const MAX_RESERVE: usize = 8192;

/// Capacity to pre-reserve for a container with the given declared length.
#[inline]
#[must_use]
pub fn reserve_hint(declared: Option<u64>) -> usize {
    declared.map_or(0, |n| {
        usize::try_from(n).map_or(MAX_RESERVE, |n| n.min(MAX_RESERVE))
    })
}
