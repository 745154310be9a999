//! # Batching Module
//!
//! Partition a sequence into fixed-size chunks.
//!
//! Every yielded chunk is a freshly allocated `Vec`; no buffer is shared
//! between chunks. The last chunk holds the remainder and may be shorter.

use crate::guard::require_argument;
use crate::SeqError;
use std::iter::FusedIterator;

/// Chunking adapter returned by [`in_batches_of`].
#[derive(Debug, Clone)]
pub struct Batches<I> {
    iter: Option<I>,
    size: usize,
}

impl<I: Iterator> Iterator for Batches<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let iter = self.iter.as_mut()?;
        let batch: Vec<_> = iter.by_ref().take(self.size).collect();
        if batch.len() < self.size {
            self.iter = None;
        }
        if batch.is_empty() { None } else { Some(batch) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.iter {
            None => (0, Some(0)),
            Some(iter) => {
                let (lower, upper) = iter.size_hint();
                (
                    lower.div_ceil(self.size),
                    upper.map(|u| u.div_ceil(self.size)),
                )
            }
        }
    }
}

impl<I: Iterator> FusedIterator for Batches<I> {}

/// Split `source` into chunks of `batch_size` elements.
///
/// Fails with `InvalidArgument` when `batch_size` is zero.
pub fn in_batches_of<I: IntoIterator>(
    source: I,
    batch_size: usize,
) -> Result<Batches<I::IntoIter>, SeqError> {
    require_argument("batch_size", batch_size == 0, "batch size must be greater than 0")?;
    Ok(Batches {
        iter: Some(source.into_iter()),
        size: batch_size,
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_tail() {
        let result: Vec<_> = in_batches_of([1, 2, 3, 4, 5], 2).expect("batches").collect();
        assert_eq!(result, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn exact_multiple_has_no_empty_tail() {
        let result: Vec<_> = in_batches_of([1, 2, 3, 4], 2).expect("batches").collect();
        assert_eq!(result, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn empty_source_has_no_batches() {
        assert_eq!(in_batches_of(Vec::<u8>::new(), 3).expect("batches").count(), 0);
    }

    #[test]
    fn zero_size_rejected() {
        let result = in_batches_of([1, 2], 0);
        assert!(matches!(
            result,
            Err(SeqError::InvalidArgument {
                name: "batch_size",
                ..
            })
        ));
    }

    #[test]
    fn batches_do_not_alias() {
        let mut batches = in_batches_of([1, 2, 3, 4], 2).expect("batches");
        let mut first = batches.next().expect("first");
        let second = batches.next().expect("second");
        first[0] = 99;
        assert_eq!(second, vec![3, 4]);
        assert_eq!(first, vec![99, 2]);
    }

    #[test]
    fn batches_are_lazy() {
        let mut pulled = 0;
        let mut batches = in_batches_of((0..).inspect(|_| pulled += 1), 3).expect("batches");
        assert_eq!(batches.next(), Some(vec![0, 1, 2]));
        drop(batches);
        assert_eq!(pulled, 3);
    }

    #[test]
    fn size_hint_rounds_up() {
        let batches = in_batches_of(0..7, 3).expect("batches");
        assert_eq!(batches.size_hint(), (3, Some(3)));
    }
}
