//! Left and right outer joins.
//!
//! Both reuse the inner-join machinery; the unmatched side surfaces as a
//! `None` slot handed to the selector instead of being dropped.

use std::hash::Hash;

use vseq_core::enumerator::Enumerator;

use super::Lookup;

/// Inner join that also emits every unmatched outer element once, with
/// `None` in the inner slot.
pub struct LeftJoin<O: Enumerator, I: Enumerator, KO, KI, F, K> {
    lookup: Option<Lookup<K, I::Item>>,
    // (outer element, group start, group len, next match); a zero-length
    // group means "emit the unmatched row, then advance".
    cursor: Option<(O::Item, usize, usize, usize)>,
    inner: Option<I>,
    outer: O,
    outer_key: KO,
    inner_key: KI,
    select: F,
}

impl<O: Enumerator, I: Enumerator, KO, KI, F, K> LeftJoin<O, I, KO, KI, F, K> {
    pub(crate) fn new(outer: O, inner: I, outer_key: KO, inner_key: KI, select: F) -> Self {
        LeftJoin {
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

impl<O, I, KO, KI, F, K, R> Enumerator for LeftJoin<O, I, KO, KI, F, K>
where
    O: Enumerator,
    I: Enumerator,
    KO: FnMut(&O::Item) -> K,
    KI: FnMut(&I::Item) -> K,
    K: Hash + Eq,
    F: FnMut(&O::Item, Option<&I::Item>) -> R,
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
                if *len == 0 {
                    let row = (self.select)(outer_item, None);
                    self.cursor = None;
                    return Some(row);
                }
                if *idx < *len {
                    let matched = &lookup.group((*start, *len))[*idx];
                    *idx += 1;
                    return Some((self.select)(outer_item, Some(matched)));
                }
            }
            self.cursor = None;
            let outer_item = self.outer.try_next()?;
            let key = (self.outer_key)(&outer_item);
            let (start, len) = lookup.probe(&key);
            self.cursor = Some((outer_item, start, len, 0));
        }
    }
}

/// Mirror image of [`LeftJoin`]: drives the inner side, indexes the outer
/// side, and emits every unmatched inner element once with `None` in the
/// outer slot. Output follows inner order.
pub struct RightJoin<O: Enumerator, I: Enumerator, KO, KI, F, K> {
    lookup: Option<Lookup<K, O::Item>>,
    cursor: Option<(I::Item, usize, usize, usize)>,
    outer: Option<O>,
    inner: I,
    outer_key: KO,
    inner_key: KI,
    select: F,
}

impl<O: Enumerator, I: Enumerator, KO, KI, F, K> RightJoin<O, I, KO, KI, F, K> {
    pub(crate) fn new(outer: O, inner: I, outer_key: KO, inner_key: KI, select: F) -> Self {
        RightJoin {
            lookup: None,
            cursor: None,
            outer: Some(outer),
            inner,
            outer_key,
            inner_key,
            select,
        }
    }
}

impl<O, I, KO, KI, F, K, R> Enumerator for RightJoin<O, I, KO, KI, F, K>
where
    O: Enumerator,
    I: Enumerator,
    KO: FnMut(&O::Item) -> K,
    KI: FnMut(&I::Item) -> K,
    K: Hash + Eq,
    F: FnMut(Option<&O::Item>, &I::Item) -> R,
{
    type Item = R;

    fn try_next(&mut self) -> Option<R> {
        if self.lookup.is_none() {
            let outer = self.outer.take()?;
            self.lookup = Some(Lookup::build(outer, &mut self.outer_key));
        }
        let lookup = self.lookup.as_ref()?;
        loop {
            if let Some((inner_item, start, len, idx)) = self.cursor.as_mut() {
                if *len == 0 {
                    let row = (self.select)(None, inner_item);
                    self.cursor = None;
                    return Some(row);
                }
                if *idx < *len {
                    let matched = &lookup.group((*start, *len))[*idx];
                    *idx += 1;
                    return Some((self.select)(Some(matched), inner_item));
                }
            }
            self.cursor = None;
            let inner_item = self.inner.try_next()?;
            let key = (self.inner_key)(&inner_item);
            let (start, len) = lookup.probe(&key);
            self.cursor = Some((inner_item, start, len, 0));
        }
    }
}
