//! The chaining surface.

use std::hash::Hash;

use vseq_core::enumerator::{Enumerator, IntoEnumerator};

use crate::aggregate_by::{AggregateBy, ConstantSeed, KeySeed};
use crate::append::{Append, Prepend};
use crate::chunk::Chunk;
use crate::concat::Concat;
use crate::distinct::{Distinct, DistinctBy};
use crate::filter::Filter;
use crate::flat_map::FlatMap;
use crate::join::{GroupJoin, Join, LeftJoin, RightJoin};
use crate::map::Map;
use crate::order_by::OrderBy;
use crate::shuffle::{entropy_seed, Shuffle};
use crate::slice::Slice;
use crate::tail::{SkipLast, TakeLast};
use crate::zip::Zip;

/// Chaining operators, available on every enumerator.
///
/// Each method captures its configuration, moves `self` into a new stage
/// value, and returns it; no method touches the source. The composed chain
/// is one stack-placed value whose concrete type spells out every stage.
///
/// ```
/// use vseq_core::enumerator::Enumerator;
/// use vseq_core::source::from_slice;
/// use vseq_operators::SeqExt;
///
/// let data = [1, 2, 3, 4];
/// let mut chain = from_slice(&data).filter(|x| x % 2 == 0).map(|x| x * 10);
/// assert_eq!(chain.try_next(), Some(20));
/// assert_eq!(chain.try_next(), Some(40));
/// assert_eq!(chain.try_next(), None);
/// ```
pub trait SeqExt: Enumerator + Sized {
    /// Keep the elements `predicate` accepts.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Transform every element.
    fn map<F, R>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> R,
    {
        Map::new(self, f)
    }

    /// At most the first `count` elements.
    ///
    /// Zero produces an empty sequence; a count past the end produces
    /// everything. Further `take`/`skip` calls collapse into the same stage.
    fn take(self, count: usize) -> Slice<Self> {
        Slice::new(self, 0, Some(count))
    }

    /// Everything but the first `count` elements.
    ///
    /// Further `take`/`skip` calls collapse into the same stage.
    fn skip(self, count: usize) -> Slice<Self> {
        Slice::new(self, count, None)
    }

    /// The final `count` elements, in order.
    fn take_last(self, count: usize) -> TakeLast<Self> {
        TakeLast::new(self, count)
    }

    /// Everything but the final `count` elements.
    fn skip_last(self, count: usize) -> SkipLast<Self> {
        SkipLast::new(self, count)
    }

    /// Map each element to a sequence and flatten the results in order.
    fn flat_map<S, F>(self, f: F) -> FlatMap<Self, S::IntoEnum, F>
    where
        S: IntoEnumerator,
        F: FnMut(Self::Item) -> S,
    {
        FlatMap::new(self, f)
    }

    /// Pair elements with `other` in lockstep, stopping at the shorter side.
    fn zip<S>(self, other: S) -> Zip<Self, S::IntoEnum>
    where
        S: IntoEnumerator,
    {
        Zip::new(self, other.into_enumerator())
    }

    /// This sequence, then one extra element.
    fn append(self, item: Self::Item) -> Append<Self> {
        Append::new(self, item)
    }

    /// One extra element, then this sequence.
    fn prepend(self, item: Self::Item) -> Prepend<Self> {
        Prepend::new(self, item)
    }

    /// This sequence, then all of `other`.
    fn concat<S>(self, other: S) -> Concat<Self, S::IntoEnum>
    where
        S: IntoEnumerator<Item = Self::Item>,
    {
        Concat::new(self, other.into_enumerator())
    }

    /// A uniformly random permutation, seeded from process entropy.
    ///
    /// Deferred: the source is materialized on first pull. Combined with
    /// [`take`](SeqExt::take), only the taken prefix is ever permuted.
    fn shuffle(self) -> Shuffle<Self> {
        Shuffle::new(self, entropy_seed())
    }

    /// [`shuffle`](SeqExt::shuffle) with a caller-chosen seed, for
    /// reproducible orders.
    fn shuffle_seeded(self, seed: u64) -> Shuffle<Self> {
        Shuffle::new(self, seed)
    }

    /// Drop repeated elements, keeping first occurrences.
    fn distinct(self) -> Distinct<Self>
    where
        Self::Item: Hash + Eq + Clone,
    {
        Distinct::new(self)
    }

    /// Drop elements whose derived key was already seen.
    fn distinct_by<K, F>(self, key: F) -> DistinctBy<Self, F, K>
    where
        F: FnMut(&Self::Item) -> K,
        K: Hash + Eq,
    {
        DistinctBy::new(self, key)
    }

    /// Batch consecutive elements into `Vec`s of `size`; the final batch may
    /// be shorter.
    ///
    /// # Panics
    ///
    /// Panics when `size` is zero.
    fn chunk(self, size: usize) -> Chunk<Self> {
        Chunk::new(self, size)
    }

    /// Sort by a derived key, ascending. Stable: equal keys keep source
    /// order. Deferred until first pull.
    fn order_by<K, F>(self, key: F) -> OrderBy<Self, F, K>
    where
        F: FnMut(&Self::Item) -> K,
        K: Ord,
    {
        OrderBy::new(self, key, false)
    }

    /// Sort by a derived key, descending. Stable, deferred.
    fn order_by_desc<K, F>(self, key: F) -> OrderBy<Self, F, K>
    where
        F: FnMut(&Self::Item) -> K,
        K: Ord,
    {
        OrderBy::new(self, key, true)
    }

    /// Fold elements into one accumulator per distinct key, seeding every
    /// group with a clone of `seed`.
    ///
    /// Results come out in first-occurrence order of the keys.
    fn aggregate_by<KF, FF, K, A>(
        self,
        key: KF,
        seed: A,
        fold: FF,
    ) -> AggregateBy<Self, KF, ConstantSeed<A>, FF, K, A>
    where
        KF: FnMut(&Self::Item) -> K,
        FF: FnMut(A, Self::Item) -> A,
        K: Hash + Eq + Clone,
        A: Clone,
    {
        AggregateBy::new(self, key, ConstantSeed(seed), fold)
    }

    /// [`aggregate_by`](SeqExt::aggregate_by) with the seed computed from
    /// each key the first time it is seen.
    fn aggregate_by_with<KF, SF, FF, K, A>(
        self,
        key: KF,
        seed: SF,
        fold: FF,
    ) -> AggregateBy<Self, KF, KeySeed<SF>, FF, K, A>
    where
        KF: FnMut(&Self::Item) -> K,
        SF: FnMut(&K) -> A,
        FF: FnMut(A, Self::Item) -> A,
        K: Hash + Eq + Clone,
    {
        AggregateBy::new(self, key, KeySeed(seed), fold)
    }

    /// Pair each element with every key-equal element of `inner`, dropping
    /// elements with no match.
    ///
    /// Builds a key index over `inner` on first pull, then streams `self`.
    fn join<S, KO, KI, K, F, R>(
        self,
        inner: S,
        outer_key: KO,
        inner_key: KI,
        select: F,
    ) -> Join<Self, S::IntoEnum, KO, KI, F, K>
    where
        S: IntoEnumerator,
        KO: FnMut(&Self::Item) -> K,
        KI: FnMut(&S::Item) -> K,
        K: Hash + Eq,
        F: FnMut(&Self::Item, &S::Item) -> R,
    {
        Join::new(self, inner.into_enumerator(), outer_key, inner_key, select)
    }

    /// [`join`](SeqExt::join) that also emits every unmatched element of
    /// `self` once, with `None` in the inner slot.
    fn left_join<S, KO, KI, K, F, R>(
        self,
        inner: S,
        outer_key: KO,
        inner_key: KI,
        select: F,
    ) -> LeftJoin<Self, S::IntoEnum, KO, KI, F, K>
    where
        S: IntoEnumerator,
        KO: FnMut(&Self::Item) -> K,
        KI: FnMut(&S::Item) -> K,
        K: Hash + Eq,
        F: FnMut(&Self::Item, Option<&S::Item>) -> R,
    {
        LeftJoin::new(self, inner.into_enumerator(), outer_key, inner_key, select)
    }

    /// [`join`](SeqExt::join) that also emits every unmatched element of
    /// `inner` once, with `None` in the outer slot. Output follows `inner`'s
    /// order.
    fn right_join<S, KO, KI, K, F, R>(
        self,
        inner: S,
        outer_key: KO,
        inner_key: KI,
        select: F,
    ) -> RightJoin<Self, S::IntoEnum, KO, KI, F, K>
    where
        S: IntoEnumerator,
        KO: FnMut(&Self::Item) -> K,
        KI: FnMut(&S::Item) -> K,
        K: Hash + Eq,
        F: FnMut(Option<&Self::Item>, &S::Item) -> R,
    {
        RightJoin::new(self, inner.into_enumerator(), outer_key, inner_key, select)
    }

    /// One row per element of `self`, paired with the full (possibly empty)
    /// group of its key-equal matches in `inner`.
    fn group_join<S, KO, KI, K, F, R>(
        self,
        inner: S,
        outer_key: KO,
        inner_key: KI,
        select: F,
    ) -> GroupJoin<Self, S::IntoEnum, KO, KI, F, K>
    where
        S: IntoEnumerator,
        KO: FnMut(&Self::Item) -> K,
        KI: FnMut(&S::Item) -> K,
        K: Hash + Eq,
        F: FnMut(&Self::Item, &[S::Item]) -> R,
    {
        GroupJoin::new(self, inner.into_enumerator(), outer_key, inner_key, select)
    }
}

impl<E: Enumerator> SeqExt for E {}
