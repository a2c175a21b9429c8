//! Grouped join: one row per outer element.

use std::hash::Hash;

use vseq_core::enumerator::Enumerator;

use super::Lookup;

/// Pairs each outer element with the full — possibly empty — group of its
/// matches, as a slice, instead of flattening.
///
/// Exactly one row per outer element, so the count capability survives:
/// it is the outer side's count.
pub struct GroupJoin<O: Enumerator, I: Enumerator, KO, KI, F, K> {
    lookup: Option<Lookup<K, I::Item>>,
    inner: Option<I>,
    outer: O,
    outer_key: KO,
    inner_key: KI,
    select: F,
}

impl<O: Enumerator, I: Enumerator, KO, KI, F, K> GroupJoin<O, I, KO, KI, F, K> {
    pub(crate) fn new(outer: O, inner: I, outer_key: KO, inner_key: KI, select: F) -> Self {
        GroupJoin {
            lookup: None,
            inner: Some(inner),
            outer,
            outer_key,
            inner_key,
            select,
        }
    }
}

impl<O, I, KO, KI, F, K, R> Enumerator for GroupJoin<O, I, KO, KI, F, K>
where
    O: Enumerator,
    I: Enumerator,
    KO: FnMut(&O::Item) -> K,
    KI: FnMut(&I::Item) -> K,
    K: Hash + Eq,
    F: FnMut(&O::Item, &[I::Item]) -> R,
{
    type Item = R;

    fn try_next(&mut self) -> Option<R> {
        if self.lookup.is_none() {
            let inner = self.inner.take()?;
            self.lookup = Some(Lookup::build(inner, &mut self.inner_key));
        }
        let lookup = self.lookup.as_ref()?;
        let outer_item = self.outer.try_next()?;
        let key = (self.outer_key)(&outer_item);
        let range = lookup.probe(&key);
        Some((self.select)(&outer_item, lookup.group(range)))
    }

    fn try_len(&self) -> Option<usize> {
        self.outer.try_len()
    }
}
