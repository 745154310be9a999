//! # Cardinality Predicates
//!
//! Membership-count checks that stop advancing as soon as the answer is known.
//! The cursor is owned by the predicate and dropped before it returns.

/// True iff `source` has exactly one element.
///
/// Advances the cursor at most twice.
pub fn has_exactly_one<I: IntoIterator>(source: I) -> bool {
    let mut iter = source.into_iter();
    iter.next().is_some() && iter.next().is_none()
}

/// True iff `source` has at least `n` elements.
///
/// `n == 0` holds for every sequence. Stops after the `n`th advance.
pub fn has_at_least<I: IntoIterator>(source: I, n: usize) -> bool {
    source.into_iter().take(n).count() == n
}

// =============================================================================
// TESTS
// =============================================================================
