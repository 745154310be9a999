//! # Generation Module
//!
//! Sequences derived by repetition or subsampling.
//!
//! - `to_circular`: replay a finite sequence forever
//! - `to_stepped`: every `step`-th element, starting with the first

use crate::guard::require_argument;
use crate::SeqError;
use std::iter::FusedIterator;

// =============================================================================
// CIRCULAR
// =============================================================================

/// Infinite replay returned by [`to_circular`].
///
/// The first pass streams from the source and records each element. Later
/// passes replay the recording. An empty source stays empty.
#[derive(Debug, Clone)]
pub struct Circular<I: Iterator> {
    source: Option<I>,
    recorded: Vec<I::Item>,
    position: usize,
}

impl<I> Iterator for Circular<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(source) = self.source.as_mut() {
            if let Some(item) = source.next() {
                self.recorded.push(item.clone());
                return Some(item);
            }
            // First pass done; release the source cursor.
            self.source = None;
        }

        if self.recorded.is_empty() {
            return None;
        }
        if self.position >= self.recorded.len() {
            self.position = 0;
        }
        let item = self.recorded.get(self.position).cloned();
        self.position += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if !self.recorded.is_empty() {
            return (usize::MAX, None);
        }
        match self.source.as_ref().map(Iterator::size_hint) {
            None | Some((0, Some(0))) => (0, Some(0)),
            Some((0, _)) => (0, None),
            Some(_) => (usize::MAX, None),
        }
    }
}

impl<I> FusedIterator for Circular<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

/// Repeat `source` forever. Empty or absent input yields an empty sequence.
pub fn to_circular<I>(source: I) -> Circular<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Circular {
        source: Some(source.into_iter()),
        recorded: Vec::new(),
        position: 0,
    }
}

// =============================================================================
// STEPPED
// =============================================================================

/// Fixed-stride subsample returned by [`to_stepped`].
#[derive(Debug, Clone)]
pub struct Stepped<I> {
    iter: Option<I>,
    step: usize,
    first: bool,
}

impl<I: Iterator> Iterator for Stepped<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let iter = self.iter.as_mut()?;
        let skip = if self.first { 0 } else { self.step - 1 };
        self.first = false;
        let item = iter.nth(skip);
        if item.is_none() {
            self.iter = None;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(iter) = &self.iter else {
            return (0, Some(0));
        };
        // Before the first pull the head element counts on its own.
        let strides = |n: usize| {
            if self.first {
                n.div_ceil(self.step)
            } else {
                n / self.step
            }
        };
        let (lower, upper) = iter.size_hint();
        (strides(lower), upper.map(strides))
    }
}

impl<I: Iterator> FusedIterator for Stepped<I> {}

/// Yield every `step`-th element of `source`, starting with the first.
///
/// Fails with `InvalidArgument` when `step` is zero. A source that runs out
/// mid-stride simply ends.
pub fn to_stepped<I: IntoIterator>(source: I, step: usize) -> Result<Stepped<I::IntoIter>, SeqError> {
    require_argument("step", step < 1, "step must be at least 1")?;
    Ok(Stepped {
        iter: Some(source.into_iter()),
        step,
        first: true,
    })
}

// =============================================================================
// TESTS
// =============================================================================
