//! Keyed folding: one accumulated result per distinct key.

use std::collections::HashMap;
use std::hash::Hash;

use vseq_core::enumerator::Enumerator;

/// Produces the starting accumulator for a newly seen key.
pub trait Seed<K, A> {
    fn seed(&mut self, key: &K) -> A;
}

/// The same starting value, cloned for every group.
#[derive(Debug, Clone)]
pub struct ConstantSeed<A>(pub(crate) A);

impl<K, A: Clone> Seed<K, A> for ConstantSeed<A> {
    fn seed(&mut self, _key: &K) -> A {
        self.0.clone()
    }
}

/// A starting value computed from the key the first time it is seen.
#[derive(Debug, Clone)]
pub struct KeySeed<SF>(pub(crate) SF);

impl<K, A, SF> Seed<K, A> for KeySeed<SF>
where
    SF: FnMut(&K) -> A,
{
    fn seed(&mut self, key: &K) -> A {
        (self.0)(key)
    }
}

/// Folds elements into per-key accumulators and emits `(key, accumulator)`
/// pairs in the order each distinct key was first seen — not sorted, not
/// completion-ordered.
///
/// The fold runs on the first pull, a single pass over the source. Key
/// equality is the key type's `Hash + Eq`; callers wanting a different
/// equivalence project or wrap the key.
pub struct AggregateBy<E, KF, S, FF, K, A> {
    inner: Option<E>,
    key_fn: KF,
    seed: S,
    fold: FF,
    groups: std::vec::IntoIter<(K, A)>,
}

impl<E, KF, S, FF, K, A> AggregateBy<E, KF, S, FF, K, A> {
    pub(crate) fn new(inner: E, key_fn: KF, seed: S, fold: FF) -> Self {
        AggregateBy {
            inner: Some(inner),
            key_fn,
            seed,
            fold,
            groups: Vec::new().into_iter(),
        }
    }
}

impl<E, KF, S, FF, K, A> Enumerator for AggregateBy<E, KF, S, FF, K, A>
where
    E: Enumerator,
    KF: FnMut(&E::Item) -> K,
    S: Seed<K, A>,
    FF: FnMut(A, E::Item) -> A,
    K: Hash + Eq + Clone,
{
    type Item = (K, A);

    fn try_next(&mut self) -> Option<(K, A)> {
        if let Some(mut inner) = self.inner.take() {
            let mut index: HashMap<K, usize> = HashMap::new();
            let mut groups: Vec<(K, Option<A>)> = Vec::new();
            while let Some(item) = inner.try_next() {
                let key = (self.key_fn)(&item);
                let slot = match index.get(&key) {
                    Some(&i) => i,
                    None => {
                        let acc = self.seed.seed(&key);
                        groups.push((key.clone(), Some(acc)));
                        index.insert(key, groups.len() - 1);
                        groups.len() - 1
                    }
                };
                let (_, acc) = &mut groups[slot];
                if let Some(current) = acc.take() {
                    *acc = Some((self.fold)(current, item));
                }
            }
            let folded: Vec<(K, A)> = groups
                .into_iter()
                .filter_map(|(k, a)| a.map(|a| (k, a)))
                .collect();
            self.groups = folded.into_iter();
        }
        self.groups.next()
    }

    fn try_len(&self) -> Option<usize> {
        // The distinct-key count is unknowable before the fold runs.
        match &self.inner {
            Some(_) => None,
            None => Some(self.groups.len()),
        }
    }

    fn try_as_slice(&self) -> Option<&[(K, A)]> {
        match &self.inner {
            Some(_) => None,
            None => Some(self.groups.as_slice()),
        }
    }
}
