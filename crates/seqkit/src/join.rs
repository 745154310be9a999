//! # String Joining
//!
//! Delimiter-joined rendering of a sequence.

use std::fmt::Display;

/// Join the `Display` form of each element with `delimiter`.
///
/// An empty (or absent, via `empty_if_absent`) source yields `""`.
pub fn join_with<I>(source: I, delimiter: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for (index, item) in source.into_iter().enumerate() {
        if index > 0 {
            out.push_str(delimiter);
        }
        out.push_str(&item.to_string());
    }
    out
}

/// Join elements rendered by `to_string` with `delimiter`.
pub fn join_with_by<I, F, S>(source: I, delimiter: &str, mut to_string: F) -> String
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> S,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (index, item) in source.into_iter().enumerate() {
        if index > 0 {
            out.push_str(delimiter);
        }
        out.push_str(to_string(&item).as_ref());
    }
    out
}

// =============================================================================
// TESTS
// =============================================================================
