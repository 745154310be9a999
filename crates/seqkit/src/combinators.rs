//! # Multi-Sequence Combinators
//!
//! Lockstep iteration over two to four input sequences.
//!
//! ## Length Contracts
//!
//! - `merge*`, `zip*`, `zip_with` are STRICT: when one input is exhausted while
//!   another still has an element, the adapter yields a single
//!   `Err(SeqError::LengthMismatch)` naming the longer input, then ends.
//!   Despite the name, `merge` does not truncate.
//! - `interlace` is LENIENT: it stops at the shorter input without an error.
//!
//! Every adapter owns its input cursors and drops all of them the moment it
//! finishes, whether by exhaustion or by error.
//!
//! `Option<I>` is itself `IntoIterator`, so a possibly-absent input passed as
//! `Some(vec)` would be treated as a one-element sequence. Normalize such
//! inputs with `empty_if_absent` or `.or_empty()` first.

use crate::{Position, SeqError};
use std::iter::FusedIterator;

/// Build the final item of a strict lockstep step that did not produce a value.
///
/// `present[i]` is whether input `i` yielded an element on that step. If none
/// did, the inputs ended together and iteration stops cleanly.
fn lockstep_end<T>(present: &[bool]) -> Option<Result<T, SeqError>> {
    let longer = present
        .iter()
        .position(|&p| p)
        .and_then(Position::from_index)?;
    tracing::debug!(%longer, "strict combinator detected unequal sequence lengths");
    Some(Err(SeqError::LengthMismatch { longer }))
}

/// Bounds for a strict lockstep adapter: at least the shortest guaranteed
/// input, at most the shortest bounded input plus one mismatch error.
fn lockstep_hint(hints: &[(usize, Option<usize>)]) -> (usize, Option<usize>) {
    let lower = hints.iter().map(|&(lo, _)| lo).min().unwrap_or(0);
    let upper = hints.iter().filter_map(|&(_, hi)| hi).min();
    (lower, upper.and_then(|hi| hi.checked_add(1)))
}

// =============================================================================
// ZIP FAMILY
// =============================================================================

/// Strict pairwise zip returned by [`zip2`].
#[derive(Debug, Clone)]
pub struct Zip2<A, B> {
    cursors: Option<(A, B)>,
}

impl<A: Iterator, B: Iterator> Iterator for Zip2<A, B> {
    type Item = Result<(A::Item, B::Item), SeqError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (a, b) = self.cursors.as_mut()?;
        match (a.next(), b.next()) {
            (Some(a), Some(b)) => Some(Ok((a, b))),
            (a, b) => {
                self.cursors = None;
                lockstep_end(&[a.is_some(), b.is_some()])
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.cursors {
            Some((a, b)) => lockstep_hint(&[a.size_hint(), b.size_hint()]),
            None => (0, Some(0)),
        }
    }
}

impl<A: Iterator, B: Iterator> FusedIterator for Zip2<A, B> {}

/// Tuple the elements of two equal-length sequences.
pub fn zip2<A, B>(first: A, second: B) -> Zip2<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
{
    Zip2 {
        cursors: Some((first.into_iter(), second.into_iter())),
    }
}

/// Strict triple zip returned by [`zip3`].
#[derive(Debug, Clone)]
pub struct Zip3<A, B, C> {
    cursors: Option<(A, B, C)>,
}

impl<A: Iterator, B: Iterator, C: Iterator> Iterator for Zip3<A, B, C> {
    type Item = Result<(A::Item, B::Item, C::Item), SeqError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (a, b, c) = self.cursors.as_mut()?;
        match (a.next(), b.next(), c.next()) {
            (Some(a), Some(b), Some(c)) => Some(Ok((a, b, c))),
            (a, b, c) => {
                self.cursors = None;
                lockstep_end(&[a.is_some(), b.is_some(), c.is_some()])
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.cursors {
            Some((a, b, c)) => lockstep_hint(&[a.size_hint(), b.size_hint(), c.size_hint()]),
            None => (0, Some(0)),
        }
    }
}

impl<A: Iterator, B: Iterator, C: Iterator> FusedIterator for Zip3<A, B, C> {}

/// Tuple the elements of three equal-length sequences.
pub fn zip3<A, B, C>(first: A, second: B, third: C) -> Zip3<A::IntoIter, B::IntoIter, C::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
{
    Zip3 {
        cursors: Some((first.into_iter(), second.into_iter(), third.into_iter())),
    }
}

/// Strict quadruple zip returned by [`zip4`].
#[derive(Debug, Clone)]
pub struct Zip4<A, B, C, D> {
    cursors: Option<(A, B, C, D)>,
}

impl<A: Iterator, B: Iterator, C: Iterator, D: Iterator> Iterator for Zip4<A, B, C, D> {
    type Item = Result<(A::Item, B::Item, C::Item, D::Item), SeqError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (a, b, c, d) = self.cursors.as_mut()?;
        match (a.next(), b.next(), c.next(), d.next()) {
            (Some(a), Some(b), Some(c), Some(d)) => Some(Ok((a, b, c, d))),
            (a, b, c, d) => {
                self.cursors = None;
                lockstep_end(&[a.is_some(), b.is_some(), c.is_some(), d.is_some()])
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.cursors {
            Some((a, b, c, d)) => {
                lockstep_hint(&[a.size_hint(), b.size_hint(), c.size_hint(), d.size_hint()])
            }
            None => (0, Some(0)),
        }
    }
}

impl<A: Iterator, B: Iterator, C: Iterator, D: Iterator> FusedIterator for Zip4<A, B, C, D> {}

/// Tuple the elements of four equal-length sequences.
pub fn zip4<A, B, C, D>(
    first: A,
    second: B,
    third: C,
    fourth: D,
) -> Zip4<A::IntoIter, B::IntoIter, C::IntoIter, D::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
    D: IntoIterator,
{
    Zip4 {
        cursors: Some((
            first.into_iter(),
            second.into_iter(),
            third.into_iter(),
            fourth.into_iter(),
        )),
    }
}

/// Strict index-aware projection returned by [`zip_with`].
#[derive(Debug, Clone)]
pub struct ZipWith<A, B, F> {
    inner: Zip2<A, B>,
    selector: F,
    index: usize,
}

impl<A, B, F, R> Iterator for ZipWith<A, B, F>
where
    A: Iterator,
    B: Iterator,
    F: FnMut(A::Item, B::Item, usize) -> R,
{
    type Item = Result<R, SeqError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (a, b) = match self.inner.next()? {
            Ok(pair) => pair,
            Err(e) => return Some(Err(e)),
        };
        let index = self.index;
        self.index = self.index.saturating_add(1);
        Some(Ok((self.selector)(a, b, index)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<A, B, F, R> FusedIterator for ZipWith<A, B, F>
where
    A: Iterator,
    B: Iterator,
    F: FnMut(A::Item, B::Item, usize) -> R,
{
}

/// Project each lockstep pair, together with its index, through `selector`.
pub fn zip_with<A, B, F, R>(first: A, second: B, selector: F) -> ZipWith<A::IntoIter, B::IntoIter, F>
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item, usize) -> R,
{
    ZipWith {
        inner: zip2(first, second),
        selector,
        index: 0,
    }
}

// =============================================================================
// MERGE FAMILY
// =============================================================================

/// Strict pairing merge returned by [`merge2`].
#[derive(Debug, Clone)]
pub struct Merge2<A, B, F> {
    inner: Zip2<A, B>,
    combine: F,
}

impl<A, B, F, R> Iterator for Merge2<A, B, F>
where
    A: Iterator,
    B: Iterator,
    F: FnMut(A::Item, B::Item) -> R,
{
    type Item = Result<R, SeqError>;

    fn next(&mut self) -> Option<Self::Item> {
        let combine = &mut self.combine;
        self.inner.next().map(|step| step.map(|(a, b)| combine(a, b)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<A, B, F, R> FusedIterator for Merge2<A, B, F>
where
    A: Iterator,
    B: Iterator,
    F: FnMut(A::Item, B::Item) -> R,
{
}

/// Combine the elements of two equal-length sequences pairwise.
pub fn merge2<A, B, F, R>(first: A, second: B, combine: F) -> Merge2<A::IntoIter, B::IntoIter, F>
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item) -> R,
{
    Merge2 {
        inner: zip2(first, second),
        combine,
    }
}

/// Strict three-way merge returned by [`merge3`].
#[derive(Debug, Clone)]
pub struct Merge3<A, B, C, F> {
    inner: Zip3<A, B, C>,
    combine: F,
}

impl<A, B, C, F, R> Iterator for Merge3<A, B, C, F>
where
    A: Iterator,
    B: Iterator,
    C: Iterator,
    F: FnMut(A::Item, B::Item, C::Item) -> R,
{
    type Item = Result<R, SeqError>;

    fn next(&mut self) -> Option<Self::Item> {
        let combine = &mut self.combine;
        self.inner
            .next()
            .map(|step| step.map(|(a, b, c)| combine(a, b, c)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<A, B, C, F, R> FusedIterator for Merge3<A, B, C, F>
where
    A: Iterator,
    B: Iterator,
    C: Iterator,
    F: FnMut(A::Item, B::Item, C::Item) -> R,
{
}

/// Combine the elements of three equal-length sequences.
pub fn merge3<A, B, C, F, R>(
    first: A,
    second: B,
    third: C,
    combine: F,
) -> Merge3<A::IntoIter, B::IntoIter, C::IntoIter, F>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
    F: FnMut(A::Item, B::Item, C::Item) -> R,
{
    Merge3 {
        inner: zip3(first, second, third),
        combine,
    }
}

// =============================================================================
// INTERLACE
// =============================================================================

/// Lenient alternation returned by [`interlace`].
#[derive(Debug, Clone)]
pub struct Interlace<A, B>
where
    B: Iterator,
{
    cursors: Option<(A, B)>,
    pending: Option<B::Item>,
}

impl<A, B, T> Iterator for Interlace<A, B>
where
    A: Iterator<Item = T>,
    B: Iterator<Item = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if let Some(item) = self.pending.take() {
            return Some(item);
        }
        let (a, b) = self.cursors.as_mut()?;
        match (a.next(), b.next()) {
            (Some(a), Some(b)) => {
                self.pending = Some(b);
                Some(a)
            }
            _ => {
                self.cursors = None;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = usize::from(self.pending.is_some());
        let Some((a, b)) = &self.cursors else {
            return (pending, Some(pending));
        };
        let ((a_lo, a_hi), (b_lo, b_hi)) = (a.size_hint(), b.size_hint());
        let pairs_hi = match (a_hi, b_hi) {
            (Some(x), Some(y)) => Some(x.min(y)),
            (hi, None) | (None, hi) => hi,
        };
        let lower = a_lo.min(b_lo).saturating_mul(2).saturating_add(pending);
        let upper = pairs_hi
            .and_then(|pairs| pairs.checked_mul(2))
            .and_then(|items| items.checked_add(pending));
        (lower, upper)
    }
}

impl<A, B, T> FusedIterator for Interlace<A, B>
where
    A: Iterator<Item = T>,
    B: Iterator<Item = T>,
{
}

/// Alternate elements `a0, b0, a1, b1, ...`, stopping at the shorter input.
///
/// Never fails on unequal lengths; an unmatched trailing element is dropped.
pub fn interlace<A, B, T>(first: A, second: B) -> Interlace<A::IntoIter, B::IntoIter>
where
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    Interlace {
        cursors: Some((first.into_iter(), second.into_iter())),
        pending: None,
    }
}

// =============================================================================
// TESTS
// =============================================================================
