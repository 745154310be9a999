//! # Extension Traits
//!
//! Method syntax over the free-function operators.
//!
//! - [`SequenceExt`] is implemented for every `Iterator`
//! - [`AbsentExt`] is implemented for `Option<I>` where `I: IntoIterator`
//!
//! Methods whose natural name would shadow a std `Iterator` method use a
//! distinct name (`first_min_by`, `sort_by_sequence`, ...).

use crate::batching::{Batches, in_batches_of};
use crate::cardinality::{has_at_least, has_exactly_one};
use crate::combinators::{Interlace, Merge2, Zip2, ZipWith, interlace, merge2, zip_with, zip2};
use crate::concat::{append, prepend};
use crate::extremum::{Comparer, NaturalOrder, SortBy, max_by_with, min_by_with, sort_by_with};
use crate::generation::{Circular, Stepped, to_circular, to_stepped};
use crate::join::{join_with, join_with_by};
use crate::normalization::{
    EmptyIfAbsent, SkipAbsent, absent_if_empty, empty_if_absent, skip_absent_elements,
};
use crate::sampling::{Randomizer, Shuffle, StdRandomizer, shuffle, shuffle_with};
use crate::traversal::{
    Tap, TapIndexed, for_each_indexed, for_each_indexed_filtered, tap, tap_indexed,
    tap_indexed_filtered,
};
use crate::SeqError;
use std::fmt::Display;
use std::iter::{Chain, Peekable};

// =============================================================================
// SEQUENCE EXTENSIONS
// =============================================================================

/// Sequence operators as iterator methods.
pub trait SequenceExt: Iterator + Sized {
    /// See [`has_exactly_one`].
    fn has_exactly_one(self) -> bool {
        has_exactly_one(self)
    }

    /// See [`has_at_least`].
    fn has_at_least(self, n: usize) -> bool {
        has_at_least(self, n)
    }

    /// See [`for_each_indexed`].
    fn for_each_indexed<F>(self, action: F)
    where
        F: FnMut(Self::Item, usize),
    {
        for_each_indexed(self, action);
    }

    /// See [`for_each_indexed_filtered`].
    fn for_each_indexed_in<F, S>(self, indices: S, action: F)
    where
        F: FnMut(Self::Item, usize),
        S: IntoIterator<Item = usize>,
    {
        for_each_indexed_filtered(self, action, indices);
    }

    /// See [`tap`].
    fn tap_each<F>(self, action: F) -> Tap<Self, F>
    where
        F: FnMut(&Self::Item),
    {
        tap(self, action)
    }

    /// See [`tap_indexed`].
    fn tap_indexed<F>(self, action: F) -> TapIndexed<Self, F>
    where
        F: FnMut(&Self::Item, usize),
    {
        tap_indexed(self, action)
    }

    /// See [`tap_indexed_filtered`].
    fn tap_indexed_in<F, S>(self, indices: S, action: F) -> TapIndexed<Self, F>
    where
        F: FnMut(&Self::Item, usize),
        S: IntoIterator<Item = usize>,
    {
        tap_indexed_filtered(self, action, indices)
    }

    /// See [`zip2`].
    fn zip_strict<B: IntoIterator>(self, other: B) -> Zip2<Self, B::IntoIter> {
        zip2(self, other)
    }

    /// See [`zip_with`].
    fn zip_strict_with<B, F, R>(self, other: B, selector: F) -> ZipWith<Self, B::IntoIter, F>
    where
        B: IntoIterator,
        F: FnMut(Self::Item, B::Item, usize) -> R,
    {
        zip_with(self, other, selector)
    }

    /// See [`merge2`].
    fn merge_strict<B, F, R>(self, other: B, combine: F) -> Merge2<Self, B::IntoIter, F>
    where
        B: IntoIterator,
        F: FnMut(Self::Item, B::Item) -> R,
    {
        merge2(self, other, combine)
    }

    /// See [`interlace`].
    fn interlace<B>(self, other: B) -> Interlace<Self, B::IntoIter>
    where
        B: IntoIterator<Item = Self::Item>,
    {
        interlace(self, other)
    }

    /// See [`to_circular`].
    fn circular(self) -> Circular<Self>
    where
        Self::Item: Clone,
    {
        to_circular(self)
    }

    /// See [`to_stepped`].
    fn stepped(self, step: usize) -> Result<Stepped<Self>, SeqError> {
        to_stepped(self, step)
    }

    /// See [`append`].
    fn append<T>(self, tail: Option<T>) -> Chain<Self, EmptyIfAbsent<T::IntoIter>>
    where
        T: IntoIterator<Item = Self::Item>,
    {
        append(self, tail)
    }

    /// See [`prepend`].
    fn prepend<H>(self, head: Option<H>) -> Chain<EmptyIfAbsent<H::IntoIter>, Self>
    where
        H: IntoIterator<Item = Self::Item>,
    {
        prepend(head, self)
    }

    /// See [`in_batches_of`].
    fn in_batches_of(self, batch_size: usize) -> Result<Batches<Self>, SeqError> {
        in_batches_of(self, batch_size)
    }

    /// See [`shuffle`].
    fn shuffled(self, count: Option<usize>) -> Shuffle<Self::Item, StdRandomizer> {
        shuffle(self, count)
    }

    /// See [`shuffle_with`].
    fn shuffled_with<R: Randomizer>(self, randomizer: R, count: Option<usize>) -> Shuffle<Self::Item, R> {
        shuffle_with(self, randomizer, count)
    }

    /// See [`min_by`](crate::extremum::min_by). First element wins on ties.
    fn first_min_by<K, F>(self, key: F) -> Result<Self::Item, SeqError>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        min_by_with(self, key, &NaturalOrder)
    }

    /// See [`max_by`](crate::extremum::max_by). First element wins on ties.
    fn first_max_by<K, F>(self, key: F) -> Result<Self::Item, SeqError>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        max_by_with(self, key, &NaturalOrder)
    }

    /// See [`min_by_with`].
    fn first_min_by_with<K, F, C>(self, key: F, comparer: &C) -> Result<Self::Item, SeqError>
    where
        F: FnMut(&Self::Item) -> K,
        C: Comparer<K> + ?Sized,
    {
        min_by_with(self, key, comparer)
    }

    /// See [`max_by_with`].
    fn first_max_by_with<K, F, C>(self, key: F, comparer: &C) -> Result<Self::Item, SeqError>
    where
        F: FnMut(&Self::Item) -> K,
        C: Comparer<K> + ?Sized,
    {
        max_by_with(self, key, comparer)
    }

    /// See [`sort_by`](crate::extremum::sort_by).
    fn sort_by_sequence<O, F, K>(
        self,
        key: F,
        order: O,
    ) -> SortBy<Self, O::IntoIter, F, NaturalOrder, K, Self::Item>
    where
        O: IntoIterator<Item = K>,
        F: FnMut(&Self::Item) -> K,
        K: Ord,
    {
        sort_by_with(self, key, order, NaturalOrder)
    }

    /// See [`join_with`].
    fn join_with(self, delimiter: &str) -> String
    where
        Self::Item: Display,
    {
        join_with(self, delimiter)
    }

    /// See [`join_with_by`].
    fn join_with_by<F, S>(self, delimiter: &str, to_string: F) -> String
    where
        F: FnMut(&Self::Item) -> S,
        S: AsRef<str>,
    {
        join_with_by(self, delimiter, to_string)
    }
}

impl<I: Iterator> SequenceExt for I {}

// =============================================================================
// ABSENT-SEQUENCE EXTENSIONS
// =============================================================================

/// Normalization operators as methods on a possibly-absent sequence.
pub trait AbsentExt<I: IntoIterator>: Sized {
    /// See [`empty_if_absent`].
    fn or_empty(self) -> EmptyIfAbsent<I::IntoIter>;

    /// See [`absent_if_empty`].
    fn none_if_empty(self) -> Option<Peekable<I::IntoIter>>;
}

impl<I: IntoIterator> AbsentExt<I> for Option<I> {
    fn or_empty(self) -> EmptyIfAbsent<I::IntoIter> {
        empty_if_absent(self)
    }

    fn none_if_empty(self) -> Option<Peekable<I::IntoIter>> {
        absent_if_empty(self)
    }
}

/// [`skip_absent_elements`] as a method on a possibly-absent sequence of options.
pub trait SkipAbsentExt<I, T>: Sized
where
    I: IntoIterator<Item = Option<T>>,
{
    fn skip_absent(self) -> SkipAbsent<I::IntoIter>;
}

impl<I, T> SkipAbsentExt<I, T> for Option<I>
where
    I: IntoIterator<Item = Option<T>>,
{
    fn skip_absent(self) -> SkipAbsent<I::IntoIter> {
        skip_absent_elements(self)
    }
}

// =============================================================================
// TESTS
// =============================================================================
