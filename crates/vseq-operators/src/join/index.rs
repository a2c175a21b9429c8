//! The key index shared by the join variants.

use std::collections::HashMap;
use std::hash::Hash;

use vseq_core::enumerator::Enumerator;

/// Key → contiguous group of indexed-side elements.
///
/// Elements live in one arena; a group is a `(start, len)` range into it, so
/// probing hands out plain slices and match cursors are bare indices.
pub(crate) struct Lookup<K, V> {
    arena: Vec<V>,
    ranges: HashMap<K, (usize, usize)>,
}

impl<K: Hash + Eq, V> Lookup<K, V> {
    /// Drain `source`, grouping elements by key in arrival order.
    pub(crate) fn build<E, KF>(mut source: E, key_fn: &mut KF) -> Self
    where
        E: Enumerator<Item = V>,
        KF: FnMut(&V) -> K,
    {
        let mut buckets: HashMap<K, Vec<V>> = HashMap::new();
        while let Some(item) = source.try_next() {
            let key = key_fn(&item);
            buckets.entry(key).or_default().push(item);
        }

        let mut arena = Vec::new();
        let mut ranges = HashMap::with_capacity(buckets.len());
        for (key, group) in buckets {
            let start = arena.len();
            let len = group.len();
            arena.extend(group);
            ranges.insert(key, (start, len));
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(keys = ranges.len(), rows = arena.len(), "built join index");
        Lookup { arena, ranges }
    }

    /// The group for `key`; `(0, 0)` when absent.
    pub(crate) fn probe(&self, key: &K) -> (usize, usize) {
        self.ranges.get(key).copied().unwrap_or((0, 0))
    }

    pub(crate) fn group(&self, range: (usize, usize)) -> &[V] {
        &self.arena[range.0..range.0 + range.1]
    }
}
