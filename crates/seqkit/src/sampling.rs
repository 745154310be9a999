//! # Sampling Module
//!
//! Random sampling without replacement through an injectable randomness source.
//!
//! ## Algorithm
//!
//! The input is copied into a private working vector. Each draw picks
//! `i = randomizer.next(len)`, yields `working[i]` and removes it with
//! `swap_remove`. Output order is draw order. Caller-owned data is never
//! mutated.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::iter::FusedIterator;

// =============================================================================
// RANDOMIZER
// =============================================================================

/// A source of uniformly distributed indices.
pub trait Randomizer {
    /// Return an integer in `[0, bound_exclusive)`.
    ///
    /// Callers never pass zero.
    fn next(&mut self, bound_exclusive: usize) -> usize;
}

impl<R: Randomizer + ?Sized> Randomizer for &mut R {
    fn next(&mut self, bound_exclusive: usize) -> usize {
        (**self).next(bound_exclusive)
    }
}

impl<R: Randomizer + ?Sized> Randomizer for Box<R> {
    fn next(&mut self, bound_exclusive: usize) -> usize {
        (**self).next(bound_exclusive)
    }
}

/// Default randomizer backed by `rand`'s `StdRng`.
#[derive(Debug, Clone)]
pub struct StdRandomizer {
    rng: StdRng,
}

impl StdRandomizer {
    /// Seed from operating-system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for reproducible samples.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandomizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Randomizer for StdRandomizer {
    fn next(&mut self, bound_exclusive: usize) -> usize {
        if bound_exclusive == 0 {
            return 0;
        }
        self.rng.gen_range(0..bound_exclusive)
    }
}

// =============================================================================
// SHUFFLE
// =============================================================================

/// Lazy sampler returned by [`shuffle`] and [`shuffle_with`].
#[derive(Debug, Clone)]
pub struct Shuffle<T, R> {
    working: Vec<T>,
    remaining: usize,
    randomizer: R,
}

impl<T, R: Randomizer> Iterator for Shuffle<T, R> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let len = self.working.len();
        if self.remaining == 0 || len == 0 {
            return None;
        }
        // Out-of-range draws from a misbehaving randomizer are clamped.
        let index = self.randomizer.next(len).min(len - 1);
        tracing::trace!(index, len, "sampling draw");
        self.remaining -= 1;
        Some(self.working.swap_remove(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.min(self.working.len());
        (n, Some(n))
    }
}

impl<T, R: Randomizer> ExactSizeIterator for Shuffle<T, R> {}

impl<T, R: Randomizer> FusedIterator for Shuffle<T, R> {}

/// Sample without replacement using `randomizer`.
///
/// Yields `min(count, len)` elements; `count` of `None` shuffles the whole
/// input.
pub fn shuffle_with<I, R>(source: I, randomizer: R, count: Option<usize>) -> Shuffle<I::Item, R>
where
    I: IntoIterator,
    R: Randomizer,
{
    let working: Vec<I::Item> = source.into_iter().collect();
    let remaining = count.unwrap_or(working.len()).min(working.len());
    tracing::debug!(len = working.len(), remaining, "built sampling working copy");
    Shuffle {
        working,
        remaining,
        randomizer,
    }
}

/// Sample without replacement using an entropy-seeded [`StdRandomizer`].
pub fn shuffle<I: IntoIterator>(source: I, count: Option<usize>) -> Shuffle<I::Item, StdRandomizer> {
    shuffle_with(source, StdRandomizer::new(), count)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    /// Replays a fixed list of draws, wrapping around.
    struct Scripted {
        draws: Vec<usize>,
        position: usize,
    }

    impl Scripted {
        fn new(draws: Vec<usize>) -> Self {
            Self { draws, position: 0 }
        }
    }

    impl Randomizer for Scripted {
        fn next(&mut self, _bound_exclusive: usize) -> usize {
            let draw = self.draws[self.position % self.draws.len()];
            self.position += 1;
            draw
        }
    }

    #[test]
    fn count_limits_sample() {
        let list = vec![1, 2, 3];
        let sample: Vec<_> = shuffle(list.iter().copied(), Some(2)).collect();
        assert_eq!(sample.len(), 2);
        let distinct: BTreeSet<_> = sample.iter().collect();
        assert_eq!(distinct.len(), 2);
        assert!(sample.iter().all(|v| list.contains(v)));
        assert_eq!(list, vec![1, 2, 3]);
    }

    #[test]
    fn default_count_is_full_shuffle() {
        let mut sample: Vec<_> = shuffle(0..10, None).collect();
        sample.sort_unstable();
        assert_eq!(sample, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn count_larger_than_input_is_clamped() {
        assert_eq!(shuffle([1, 2], Some(5)).count(), 2);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(shuffle(Vec::<u8>::new(), None).count(), 0);
    }

    #[test]
    fn scripted_draw_order() {
        // working [a,b,c,d]: draw 1 -> b, working [a,d,c]
        // draw 0 -> a, working [c,d]; draw 1 -> d, working [c]; draw 0 -> c
        let mut rng = Scripted::new(vec![1, 0, 1, 0]);
        let sample: Vec<_> = shuffle_with(['a', 'b', 'c', 'd'], &mut rng, None).collect();
        assert_eq!(sample, vec!['b', 'a', 'd', 'c']);
    }

    #[test]
    fn scripted_runs_are_deterministic() {
        let run = || {
            let rng = Scripted::new(vec![2, 0]);
            shuffle_with(0..5, rng, Some(3)).collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn out_of_range_draw_is_clamped() {
        let rng = Scripted::new(vec![usize::MAX]);
        let sample: Vec<_> = shuffle_with([1, 2, 3], rng, Some(1)).collect();
        assert_eq!(sample, vec![3]);
    }

    #[test]
    fn seeded_randomizer_is_reproducible() {
        let a: Vec<_> = shuffle_with(0..20, StdRandomizer::seeded(42), None).collect();
        let b: Vec<_> = shuffle_with(0..20, StdRandomizer::seeded(42), None).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn std_randomizer_stays_in_bounds() {
        let mut rng = StdRandomizer::seeded(7);
        for bound in 1..50 {
            assert!(rng.next(bound) < bound);
        }
    }

    #[test]
    fn sample_is_exact_size() {
        let sampler = shuffle(0..10, Some(4));
        assert_eq!(sampler.len(), 4);
    }
}
