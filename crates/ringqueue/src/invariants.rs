//! Debug assertion macros for ring queue invariants.
//!
//! Only active in debug builds (`#[cfg(debug_assertions)]`), so there is
//! zero overhead in release builds.

// =============================================================================
// Bounded Count
// =============================================================================

/// Assert that count does not exceed capacity.
///
/// **Invariant**: `0 ≤ count ≤ capacity`
///
/// Used in: `enqueue()` after incrementing count
macro_rules! debug_assert_bounded_count {
    ($count:expr, $capacity:expr) => {
        debug_assert!(
            $count <= $capacity,
            "bounded count violated: count {} exceeds capacity {}",
            $count,
            $capacity
        )
    };
}

// =============================================================================
// Cursor Consistency
// =============================================================================

/// Assert that the tail cursor is derivable from head and count.
///
/// **Invariant**: `tail == (head + count) % capacity`
///
/// Used in: `enqueue()` and `dequeue()` after moving a cursor
macro_rules! debug_assert_cursor_consistency {
    ($head:expr, $tail:expr, $count:expr, $capacity:expr) => {
        debug_assert!(
            $tail == ($head + $count) % $capacity,
            "cursor consistency violated: tail {} != (head {} + count {}) % {}",
            $tail,
            $head,
            $count,
            $capacity
        )
    };
}

// =============================================================================
// Live Slot Access
// =============================================================================

/// Assert that a logical offset refers to a live item.
///
/// **Invariant**: only slots in `[head, head + count)` (circular) hold values
///
/// Used in: `Iter::next()` before reading a slot
macro_rules! debug_assert_live_offset {
    ($offset:expr, $count:expr) => {
        debug_assert!(
            $offset < $count,
            "live slot violated: offset {} outside live range [0, {})",
            $offset,
            $count
        )
    };
}

/// Assert that the slot under `head` holds a value.
///
/// **Invariant**: `count > 0` implies `slots[head].is_some()`
///
/// Used in: `dequeue()` before taking the head slot
macro_rules! debug_assert_live_slot {
    ($is_live:expr, $head:expr, $count:expr) => {
        debug_assert!(
            $is_live,
            "live slot violated: head slot {} is vacant with count {}",
            $head,
            $count
        )
    };
}

pub(crate) use debug_assert_bounded_count;
pub(crate) use debug_assert_cursor_consistency;
pub(crate) use debug_assert_live_offset;
pub(crate) use debug_assert_live_slot;
