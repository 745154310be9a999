//! # Extremum and Ordering
//!
//! Key-projected selection and reordering.
//!
//! - `min_by` / `max_by`: single pass, FIRST element wins on ties
//! - `sort_by`: reorder a source to follow a sequence of keys
//!
//! Every operator has a `_with` variant that takes a [`Comparer`]; the plain
//! variants use the key type's natural ordering.

use crate::SeqError;
use std::cmp::Ordering;
use std::iter::FusedIterator;

// =============================================================================
// COMPARER
// =============================================================================

/// Three-way comparison over keys.
pub trait Comparer<K: ?Sized> {
    fn compare(&self, left: &K, right: &K) -> Ordering;
}

impl<K: ?Sized, F> Comparer<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, left: &K, right: &K) -> Ordering {
        self(left, right)
    }
}

/// The key type's own `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparer<K> for NaturalOrder {
    fn compare(&self, left: &K, right: &K) -> Ordering {
        left.cmp(right)
    }
}

// =============================================================================
// MIN / MAX
// =============================================================================

/// Keep the element whose key compares as `wanted` against every other.
///
/// A candidate replaces the current best only on strict improvement.
fn select_by<I, K, F, C>(source: I, mut key: F, comparer: &C, wanted: Ordering) -> Result<I::Item, SeqError>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    C: Comparer<K> + ?Sized,
{
    let mut iter = source.into_iter();
    let first = iter.next().ok_or(SeqError::EmptyInput)?;
    let first_key = key(&first);

    let (best, _) = iter.fold((first, first_key), |(best, best_key), candidate| {
        let candidate_key = key(&candidate);
        if comparer.compare(&candidate_key, &best_key) == wanted {
            (candidate, candidate_key)
        } else {
            (best, best_key)
        }
    });
    Ok(best)
}

/// Element with the smallest key. Fails with `EmptyInput` on an empty source.
pub fn min_by<I, K, F>(source: I, key: F) -> Result<I::Item, SeqError>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    select_by(source, key, &NaturalOrder, Ordering::Less)
}

/// Element with the largest key. Fails with `EmptyInput` on an empty source.
pub fn max_by<I, K, F>(source: I, key: F) -> Result<I::Item, SeqError>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    select_by(source, key, &NaturalOrder, Ordering::Greater)
}

/// [`min_by`] under a caller-supplied comparer.
pub fn min_by_with<I, K, F, C>(source: I, key: F, comparer: &C) -> Result<I::Item, SeqError>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    C: Comparer<K> + ?Sized,
{
    select_by(source, key, comparer, Ordering::Less)
}

/// [`max_by`] under a caller-supplied comparer.
pub fn max_by_with<I, K, F, C>(source: I, key: F, comparer: &C) -> Result<I::Item, SeqError>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    C: Comparer<K> + ?Sized,
{
    select_by(source, key, comparer, Ordering::Greater)
}

// =============================================================================
// SORT BY ORDER SEQUENCE
// =============================================================================

/// Reordering adapter returned by [`sort_by`] and [`sort_by_with`].
///
/// The key lookup is built from the whole source on the first pull. When
/// several source elements share a key, the LAST one is kept.
pub struct SortBy<S, O, F, C, K, T> {
    pending: Option<(S, F)>,
    lookup: Vec<(K, T)>,
    order: O,
    comparer: C,
}

impl<S, O, F, C, K, T> SortBy<S, O, F, C, K, T>
where
    S: Iterator<Item = T>,
    F: FnMut(&T) -> K,
    C: Comparer<K>,
{
    fn build_lookup(&mut self) {
        let Some((source, mut key)) = self.pending.take() else {
            return;
        };
        let comparer = &self.comparer;
        let mut entries: Vec<(K, T)> = source.map(|item| (key(&item), item)).collect();
        // Reverse before the stable sort so the last occurrence of each key
        // leads its run; dedup keeps the run leader.
        entries.reverse();
        entries.sort_by(|(a, _), (b, _)| comparer.compare(a, b));
        entries.dedup_by(|(later, _), (kept, _)| comparer.compare(later, kept) == Ordering::Equal);
        tracing::debug!(keys = entries.len(), "built ordering lookup");
        self.lookup = entries;
    }
}

impl<S, O, F, C, K, T> Iterator for SortBy<S, O, F, C, K, T>
where
    S: Iterator<Item = T>,
    O: Iterator<Item = K>,
    F: FnMut(&T) -> K,
    C: Comparer<K>,
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.build_lookup();
        loop {
            let wanted = self.order.next()?;
            let comparer = &self.comparer;
            let found = self
                .lookup
                .binary_search_by(|(candidate, _)| comparer.compare(candidate, &wanted))
                .ok()
                .and_then(|index| self.lookup.get(index));
            if let Some((_, item)) = found {
                return Some(item.clone());
            }
        }
    }
}

impl<S, O, F, C, K, T> FusedIterator for SortBy<S, O, F, C, K, T>
where
    S: Iterator<Item = T>,
    O: FusedIterator<Item = K>,
    F: FnMut(&T) -> K,
    C: Comparer<K>,
    T: Clone,
{
}

/// Yield, for each key of `order`, the source element with that key.
///
/// Keys with no matching element are skipped. Elements whose key never
/// appears in `order` are dropped.
pub fn sort_by<I, O, F, K>(
    source: I,
    key: F,
    order: O,
) -> SortBy<I::IntoIter, O::IntoIter, F, NaturalOrder, K, I::Item>
where
    I: IntoIterator,
    O: IntoIterator<Item = K>,
    F: FnMut(&I::Item) -> K,
    K: Ord,
{
    sort_by_with(source, key, order, NaturalOrder)
}

/// [`sort_by`] with keys matched by `comparer` returning `Equal`.
pub fn sort_by_with<I, O, F, K, C>(
    source: I,
    key: F,
    order: O,
    comparer: C,
) -> SortBy<I::IntoIter, O::IntoIter, F, C, K, I::Item>
where
    I: IntoIterator,
    O: IntoIterator<Item = K>,
    F: FnMut(&I::Item) -> K,
    C: Comparer<K>,
{
    SortBy {
        pending: Some((source.into_iter(), key)),
        lookup: Vec::new(),
        order: order.into_iter(),
        comparer,
    }
}

// =============================================================================
// TESTS
// =============================================================================
