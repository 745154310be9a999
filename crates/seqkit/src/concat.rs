//! # Concatenation Helpers
//!
//! Lazy append/prepend of fixed elements. An absent element list is passed
//! as `None` and treated as empty.

use crate::normalization::{EmptyIfAbsent, empty_if_absent};
use std::iter::Chain;

/// Yield `source`, then the elements of `tail`.
pub fn append<I, T>(source: I, tail: Option<T>) -> Chain<I::IntoIter, EmptyIfAbsent<T::IntoIter>>
where
    I: IntoIterator,
    T: IntoIterator<Item = I::Item>,
{
    source.into_iter().chain(empty_if_absent(tail))
}

/// Yield the elements of `head`, then `source`.
pub fn prepend<H, I>(head: Option<H>, source: I) -> Chain<EmptyIfAbsent<H::IntoIter>, I::IntoIter>
where
    H: IntoIterator,
    I: IntoIterator<Item = H::Item>,
{
    empty_if_absent(head).chain(source)
}

// =============================================================================
// TESTS
// =============================================================================
