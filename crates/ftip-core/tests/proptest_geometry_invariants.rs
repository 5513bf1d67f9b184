//! Property-based invariant tests for geometry primitives (Rect, Size).
//!
//! 1. Right/bottom edges are consistent with left+width, top+height.
//! 2. Centres lie between the edges of a non-empty rect.
//! 3. Translating moves edges and preserves size.
//! 4. Contains agrees with the half-open edge definition.
//! 5. Emptiness is exactly "some extent is not strictly positive".

use ftip_core::geometry::{Rect, Size};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (
        -2000.0f64..2000.0,
        -2000.0f64..2000.0,
        0.0f64..2000.0,
        0.0f64..2000.0,
    )
        .prop_map(|(t, l, w, h)| Rect::new(t, l, w, h))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Edge consistency
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn edges_consistent(r in rect_strategy()) {
        prop_assert_eq!(r.right(), r.left + r.width);
        prop_assert_eq!(r.bottom(), r.top + r.height);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Centres between edges
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn centres_between_edges(r in rect_strategy()) {
        prop_assert!(r.center_x() >= r.left && r.center_x() <= r.right());
        prop_assert!(r.center_y() >= r.top && r.center_y() <= r.bottom());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Translation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn translate_preserves_size(r in rect_strategy(), dy in -500.0f64..500.0, dx in -500.0f64..500.0) {
        let moved = r.translate(dy, dx);
        prop_assert_eq!(moved.size(), r.size());
        prop_assert_eq!(moved.top, r.top + dy);
        prop_assert_eq!(moved.left, r.left + dx);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Contains
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn contains_matches_edges(r in rect_strategy(), x in -3000.0f64..3000.0, y in -3000.0f64..3000.0) {
        let expected = x >= r.left && x < r.right() && y >= r.top && y < r.bottom();
        prop_assert_eq!(r.contains(x, y), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Emptiness
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn empty_iff_non_positive_extent(w in -10.0f64..10.0, h in -10.0f64..10.0) {
        let size = Size::new(w, h);
        prop_assert_eq!(size.is_empty(), w <= 0.0 || h <= 0.0);
    }
}
