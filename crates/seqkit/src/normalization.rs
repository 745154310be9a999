//! # Normalization Module
//!
//! Conversions between absent and empty sequences.
//!
//! An absent sequence is `None`. Every operator in this crate treats it as the
//! canonical empty sequence; these adapters are how callers get there.

use std::iter::{FusedIterator, Peekable};

// =============================================================================
// EMPTY IF ABSENT
// =============================================================================

/// Iterator returned by [`empty_if_absent`].
///
/// Yields the elements of the wrapped sequence, or nothing when it was absent.
#[derive(Debug, Clone)]
pub struct EmptyIfAbsent<I> {
    inner: Option<I>,
}

impl<I: Iterator> Iterator for EmptyIfAbsent<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.as_mut()?.next();
        if item.is_none() {
            self.inner = None;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<I: Iterator> FusedIterator for EmptyIfAbsent<I> {}

/// Return `source` unchanged if present, else an empty sequence. Never fails.
pub fn empty_if_absent<I: IntoIterator>(source: Option<I>) -> EmptyIfAbsent<I::IntoIter> {
    EmptyIfAbsent {
        inner: source.map(IntoIterator::into_iter),
    }
}

// =============================================================================
// ABSENT IF EMPTY
// =============================================================================

/// Return `None` when `source` is absent or has no elements.
///
/// The emptiness check pulls one element; it is buffered in the returned
/// `Peekable`, so the caller still sees every element and the rest of the
/// sequence stays lazy.
pub fn absent_if_empty<I: IntoIterator>(source: Option<I>) -> Option<Peekable<I::IntoIter>> {
    let mut iter = source?.into_iter().peekable();
    iter.peek()?;
    Some(iter)
}

// =============================================================================
// SKIP ABSENT ELEMENTS
// =============================================================================

/// Iterator returned by [`skip_absent_elements`].
#[derive(Debug, Clone)]
pub struct SkipAbsent<I> {
    inner: EmptyIfAbsent<I>,
}

impl<I, T> Iterator for SkipAbsent<I>
where
    I: Iterator<Item = Option<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(item) = self.inner.next()? {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

impl<I, T> FusedIterator for SkipAbsent<I> where I: Iterator<Item = Option<T>> {}

/// Treat an absent `source` as empty, then drop every `None` element.
pub fn skip_absent_elements<I, T>(source: Option<I>) -> SkipAbsent<I::IntoIter>
where
    I: IntoIterator<Item = Option<T>>,
{
    SkipAbsent {
        inner: empty_if_absent(source),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_if_absent_on_none_is_empty() {
        let result: Vec<u8> = empty_if_absent(None::<Vec<u8>>).collect();
        assert!(result.is_empty());
    }

    #[test]
    fn empty_if_absent_passes_elements_through() {
        let result: Vec<_> = empty_if_absent(Some(vec![1, 2, 3])).collect();
        assert_eq!(result, vec![1, 2, 3]);
    }

    #[test]
    fn empty_if_absent_size_hint() {
        assert_eq!(empty_if_absent(None::<Vec<u8>>).size_hint(), (0, Some(0)));
        assert_eq!(empty_if_absent(Some(vec![1, 2])).size_hint(), (2, Some(2)));
    }

    #[test]
    fn absent_if_empty_on_empty_is_none() {
        assert!(absent_if_empty(Some(Vec::<u8>::new())).is_none());
        assert!(absent_if_empty(None::<Vec<u8>>).is_none());
    }

    #[test]
    fn absent_if_empty_keeps_first_element() {
        // A one-shot iterator: the first element must survive the emptiness check.
        let source = vec![10, 20].into_iter();
        let result: Vec<_> = absent_if_empty(Some(source)).expect("non-empty").collect();
        assert_eq!(result, vec![10, 20]);
    }

    #[test]
    fn absent_if_empty_pulls_only_one_element() {
        let mut pulled = 0;
        let source = (0..100).inspect(|_| pulled += 1);
        let kept = absent_if_empty(Some(source));
        assert!(kept.is_some());
        drop(kept);
        assert_eq!(pulled, 1);
    }

    #[test]
    fn skip_absent_elements_filters_none() {
        let source = vec![Some(1), None, Some(3), None];
        let result: Vec<_> = skip_absent_elements(Some(source)).collect();
        assert_eq!(result, vec![1, 3]);
    }

    #[test]
    fn skip_absent_elements_on_absent_source() {
        let result: Vec<u8> = skip_absent_elements(None::<Vec<Option<u8>>>).collect();
        assert!(result.is_empty());
    }
}
