//! Inner (equi-)join.

use std::hash::Hash;

use vseq_core::enumerator::Enumerator;

use super::Lookup;

/// Pairs each outer element with every matching inner element.
///
/// The inner side is drained into a key index on the first pull; the outer
/// side then streams. Outer order is preserved, and matches for one outer
/// element come out in the inner side's arrival order. An outer element
/// with no matches contributes nothing.
pub struct Join<O: Enumerator, I: Enumerator, KO, KI, F, K> {
    lookup: Option<Lookup<K, I::Item>>,
    // (outer element, group start, group len, next match)
    cursor: Option<(O::Item, usize, usize, usize)>,
    inner: Option<I>,
    outer: O,
    outer_key: KO,
    inner_key: KI,
    select: F,
}

impl<O: Enumerator, I: Enumerator, KO, KI, F, K> Join<O, I, KO, KI, F, K> {
    pub(crate) fn new(outer: O, inner: I, outer_key: KO, inner_key: KI, select: F) -> Self {
        Join {
            lookup: None,
            cursor: None,
            inner: Some(inner),
            outer,
            outer_key,
            inner_key,
            select,
        }
    }
}

impl<O, I, KO, KI, F, K, R> Enumerator for Join<O, I, KO, KI, F, K>
where
    O: Enumerator,
    I: Enumerator,
    KO: FnMut(&O::Item) -> K,
    KI: FnMut(&I::Item) -> K,
    K: Hash + Eq,
    F: FnMut(&O::Item, &I::Item) -> R,
{
    type Item = R;

    fn try_next(&mut self) -> Option<R> {
        if self.lookup.is_none() {
            let inner = self.inner.take()?;
            self.lookup = Some(Lookup::build(inner, &mut self.inner_key));
        }
        let lookup = self.lookup.as_ref()?;
        loop {
            if let Some((outer_item, start, len, idx)) = self.cursor.as_mut() {
                if *idx < *len {
                    let matched = &lookup.group((*start, *len))[*idx];
                    *idx += 1;
                    return Some((self.select)(outer_item, matched));
                }
            }
            self.cursor = None;
            let outer_item = self.outer.try_next()?;
            let key = (self.outer_key)(&outer_item);
            let (start, len) = lookup.probe(&key);
            if len > 0 {
                self.cursor = Some((outer_item, start, len, 0));
            }
        }
    }
}
