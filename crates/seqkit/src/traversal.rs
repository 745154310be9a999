//! # Traversal Module
//!
//! Per-element side effects, eager and lazy.
//!
//! - `for_each*` run the action for every element before returning
//! - `tap*` return an adapter that fires the action when each element is pulled
//!
//! Indices are zero-based positions in the source. The filtered variants still
//! traverse every element; indices outside the set are skipped, not omitted.

use std::collections::BTreeSet;
use std::iter::FusedIterator;

// =============================================================================
// EAGER TRAVERSAL
// =============================================================================

/// Invoke `action` once per element, in order.
pub fn for_each<I, F>(source: I, mut action: F)
where
    I: IntoIterator,
    F: FnMut(I::Item),
{
    for item in source {
        action(item);
    }
}

/// Invoke `action` once per element with its index.
pub fn for_each_indexed<I, F>(source: I, mut action: F)
where
    I: IntoIterator,
    F: FnMut(I::Item, usize),
{
    for (index, item) in source.into_iter().enumerate() {
        action(item, index);
    }
}

/// Invoke `action` only for elements whose index is in `indices`.
///
/// The whole source is traversed regardless of the set's contents.
pub fn for_each_indexed_filtered<I, F, S>(source: I, mut action: F, indices: S)
where
    I: IntoIterator,
    F: FnMut(I::Item, usize),
    S: IntoIterator<Item = usize>,
{
    let indices: BTreeSet<usize> = indices.into_iter().collect();
    for (index, item) in source.into_iter().enumerate() {
        if indices.contains(&index) {
            action(item, index);
        }
    }
}

// =============================================================================
// LAZY TRAVERSAL (TAP)
// =============================================================================

/// Adapter returned by [`tap`].
#[derive(Debug, Clone)]
pub struct Tap<I, F> {
    iter: I,
    action: F,
}

impl<I, F> Iterator for Tap<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item),
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        (self.action)(&item);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F> FusedIterator for Tap<I, F>
where
    I: FusedIterator,
    F: FnMut(&I::Item),
{
}

/// Re-yield every element, running `action` on each as it is pulled.
pub fn tap<I, F>(source: I, action: F) -> Tap<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(&I::Item),
{
    Tap {
        iter: source.into_iter(),
        action,
    }
}

/// Adapter returned by [`tap_indexed`] and [`tap_indexed_filtered`].
#[derive(Debug, Clone)]
pub struct TapIndexed<I, F> {
    iter: I,
    action: F,
    index: usize,
    // `None` means every index is selected.
    indices: Option<BTreeSet<usize>>,
}

impl<I, F> Iterator for TapIndexed<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, usize),
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let index = self.index;
        self.index = self.index.saturating_add(1);
        if self.indices.as_ref().is_none_or(|set| set.contains(&index)) {
            (self.action)(&item, index);
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F> FusedIterator for TapIndexed<I, F>
where
    I: FusedIterator,
    F: FnMut(&I::Item, usize),
{
}

/// Re-yield every element, running `action` with its index as it is pulled.
pub fn tap_indexed<I, F>(source: I, action: F) -> TapIndexed<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(&I::Item, usize),
{
    TapIndexed {
        iter: source.into_iter(),
        action,
        index: 0,
        indices: None,
    }
}

/// Like [`tap_indexed`], but `action` only fires for indices in `indices`.
pub fn tap_indexed_filtered<I, F, S>(source: I, action: F, indices: S) -> TapIndexed<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(&I::Item, usize),
    S: IntoIterator<Item = usize>,
{
    TapIndexed {
        iter: source.into_iter(),
        action,
        index: 0,
        indices: Some(indices.into_iter().collect()),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalization::empty_if_absent;
    use std::cell::RefCell;

    #[test]
    fn for_each_visits_in_order() {
        let mut seen = Vec::new();
        for_each(vec!["a", "b", "c"], |s| seen.push(s));
        assert_eq!(seen, vec!["a", "b", "c"]);
    }

    #[test]
    fn for_each_on_absent_does_nothing() {
        let mut calls = 0;
        for_each(empty_if_absent(None::<Vec<u8>>), |_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn for_each_indexed_passes_indices() {
        let mut seen = Vec::new();
        for_each_indexed(vec!['x', 'y'], |c, i| seen.push((c, i)));
        assert_eq!(seen, vec![('x', 0), ('y', 1)]);
    }

    #[test]
    fn filtered_traverses_everything_but_acts_on_selected() {
        let mut pulled = 0;
        let mut seen = Vec::new();
        let source = (10..15).inspect(|_| pulled += 1);
        for_each_indexed_filtered(source, |v, i| seen.push((v, i)), [1, 3, 99]);
        assert_eq!(seen, vec![(11, 1), (13, 3)]);
        assert_eq!(pulled, 5);
    }

    #[test]
    fn tap_is_lazy() {
        let fired = RefCell::new(Vec::new());
        let mut tapped = tap(vec![1, 2, 3], |v| fired.borrow_mut().push(*v));
        assert!(fired.borrow().is_empty());

        assert_eq!(tapped.next(), Some(1));
        assert_eq!(*fired.borrow(), vec![1]);

        assert_eq!(tapped.next(), Some(2));
        assert_eq!(*fired.borrow(), vec![1, 2]);
    }

    #[test]
    fn tap_fires_once_per_element() {
        let mut count = 0;
        let collected: Vec<_> = tap(0..4, |_| count += 1).collect();
        assert_eq!(collected, vec![0, 1, 2, 3]);
        assert_eq!(count, 4);
    }

    #[test]
    fn tap_indexed_reports_positions() {
        let mut seen = Vec::new();
        let collected: Vec<_> = tap_indexed(vec!['a', 'b'], |c, i| seen.push((*c, i))).collect();
        assert_eq!(collected, vec!['a', 'b']);
        assert_eq!(seen, vec![('a', 0), ('b', 1)]);
    }

    #[test]
    fn tap_indexed_filtered_yields_all_elements() {
        let mut seen = Vec::new();
        let collected: Vec<_> =
            tap_indexed_filtered(vec![5, 6, 7, 8], |v, i| seen.push((*v, i)), [0, 2]).collect();
        assert_eq!(collected, vec![5, 6, 7, 8]);
        assert_eq!(seen, vec![(5, 0), (7, 2)]);
    }

    #[test]
    fn tap_indexed_filtered_is_lazy() {
        let fired = RefCell::new(Vec::new());
        let mut tapped = tap_indexed_filtered(
            vec!['p', 'q', 'r'],
            |c, i| fired.borrow_mut().push((*c, i)),
            [1],
        );
        assert!(fired.borrow().is_empty());

        assert_eq!(tapped.next(), Some('p'));
        assert!(fired.borrow().is_empty());

        assert_eq!(tapped.next(), Some('q'));
        assert_eq!(*fired.borrow(), vec![('q', 1)]);
    }
}
