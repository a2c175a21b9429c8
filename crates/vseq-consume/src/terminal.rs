//! Terminal operations: consume a chain into a concrete result.

use std::collections::HashMap;
use std::hash::Hash;

use vseq_core::enumerator::{Enumerator, IntoEnumerator};
use vseq_core::error::{Error, Result};

use crate::iter::Iter;

/// Consuming operations, available on every enumerator.
///
/// Argument-free probes that can answer without enumeration do so; every
/// operation falls back to pulling one element at a time, so none of them
/// depend on a capability being present.
pub trait ConsumeExt: Enumerator + Sized {
    /// Collect the remaining elements into a `Vec`.
    ///
    /// Uses the slice capability when the chain exposes one, and the count
    /// capability to reserve otherwise.
    fn to_vec(mut self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        if let Some(slice) = self.try_as_slice() {
            return slice.to_vec();
        }
        let mut out = match self.try_len() {
            Some(n) => Vec::with_capacity(n),
            None => Vec::new(),
        };
        while let Some(item) = self.try_next() {
            out.push(item);
        }
        out
    }

    /// Build a map keyed by `key`. Two elements mapping to the same key are
    /// an error.
    fn to_map<K, KF>(mut self, mut key: KF) -> Result<HashMap<K, Self::Item>>
    where
        K: Hash + Eq,
        KF: FnMut(&Self::Item) -> K,
    {
        let mut map = match self.try_len() {
            Some(n) => HashMap::with_capacity(n),
            None => HashMap::new(),
        };
        while let Some(item) = self.try_next() {
            if map.insert(key(&item), item).is_some() {
                return Err(Error::DuplicateKey);
            }
        }
        Ok(map)
    }

    /// The number of remaining elements; enumerates only when the count
    /// capability declines.
    fn count(mut self) -> usize {
        if let Some(n) = self.try_len() {
            return n;
        }
        let mut n = 0;
        while self.try_next().is_some() {
            n += 1;
        }
        n
    }

    /// The first element.
    fn first(mut self) -> Result<Self::Item> {
        self.try_next().ok_or(Error::Empty)
    }

    /// The first element `predicate` accepts. Distinguishes an empty
    /// sequence from one where nothing matched.
    fn first_where<P>(mut self, mut predicate: P) -> Result<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut saw_any = false;
        while let Some(item) = self.try_next() {
            saw_any = true;
            if predicate(&item) {
                return Ok(item);
            }
        }
        Err(if saw_any { Error::NoMatch } else { Error::Empty })
    }

    /// The final element.
    fn last(mut self) -> Result<Self::Item> {
        let mut last = None;
        while let Some(item) = self.try_next() {
            last = Some(item);
        }
        last.ok_or(Error::Empty)
    }

    /// The final element `predicate` accepts.
    fn last_where<P>(mut self, mut predicate: P) -> Result<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut saw_any = false;
        let mut last = None;
        while let Some(item) = self.try_next() {
            saw_any = true;
            if predicate(&item) {
                last = Some(item);
            }
        }
        match last {
            Some(item) => Ok(item),
            None if saw_any => Err(Error::NoMatch),
            None => Err(Error::Empty),
        }
    }

    /// The only element. More than one is as much an error as none.
    fn single(mut self) -> Result<Self::Item> {
        let first = self.try_next().ok_or(Error::Empty)?;
        if self.try_next().is_some() {
            return Err(Error::MultipleMatches);
        }
        Ok(first)
    }

    /// The only element `predicate` accepts. Stops at the second match.
    fn single_where<P>(mut self, mut predicate: P) -> Result<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut saw_any = false;
        let mut found = None;
        while let Some(item) = self.try_next() {
            saw_any = true;
            if predicate(&item) {
                if found.is_some() {
                    return Err(Error::MultipleMatches);
                }
                found = Some(item);
            }
        }
        match found {
            Some(item) => Ok(item),
            None if saw_any => Err(Error::NoMatch),
            None => Err(Error::Empty),
        }
    }

    /// The element at position `index`, failing fast when the count
    /// capability already rules it out.
    fn element_at(mut self, index: usize) -> Result<Self::Item> {
        if let Some(n) = self.try_len() {
            if index >= n {
                return Err(Error::OutOfRange { index });
            }
        }
        let mut remaining = index;
        loop {
            let item = self.try_next().ok_or(Error::OutOfRange { index })?;
            if remaining == 0 {
                return Ok(item);
            }
            remaining -= 1;
        }
    }

    /// Fold every element into `seed`.
    fn fold<A, F>(mut self, seed: A, mut f: F) -> A
    where
        F: FnMut(A, Self::Item) -> A,
    {
        let mut acc = seed;
        while let Some(item) = self.try_next() {
            acc = f(acc, item);
        }
        acc
    }

    /// Fold with the first element as the seed.
    fn reduce<F>(mut self, mut f: F) -> Result<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let mut acc = self.try_next().ok_or(Error::Empty)?;
        while let Some(item) = self.try_next() {
            acc = f(acc, item);
        }
        Ok(acc)
    }

    /// Element-wise equality with another sequence.
    ///
    /// Two known counts that disagree settle it without enumeration; two
    /// exposed slices compare directly.
    fn seq_eq<S>(mut self, other: S) -> bool
    where
        S: IntoEnumerator<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        let mut other = other.into_enumerator();
        if let (Some(a), Some(b)) = (self.try_len(), other.try_len()) {
            if a != b {
                return false;
            }
        }
        if let (Some(a), Some(b)) = (self.try_as_slice(), other.try_as_slice()) {
            return a == b;
        }
        loop {
            match (self.try_next(), other.try_next()) {
                (Some(a), Some(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (None, None) => return true,
                _ => return false,
            }
        }
    }

    /// Whether any element satisfies `predicate`. Short-circuits.
    fn any<P>(mut self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        while let Some(item) = self.try_next() {
            if predicate(&item) {
                return true;
            }
        }
        false
    }

    /// Whether every element satisfies `predicate`. Short-circuits.
    fn all<P>(mut self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        while let Some(item) = self.try_next() {
            if !predicate(&item) {
                return false;
            }
        }
        true
    }

    /// Whether `target` occurs in the sequence.
    fn contains(mut self, target: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        while let Some(item) = self.try_next() {
            if item == *target {
                return true;
            }
        }
        false
    }

    /// The smallest element; ties keep the earliest.
    fn min(mut self) -> Result<Self::Item>
    where
        Self::Item: Ord,
    {
        let mut best = self.try_next().ok_or(Error::Empty)?;
        while let Some(item) = self.try_next() {
            if item < best {
                best = item;
            }
        }
        Ok(best)
    }

    /// The largest element; ties keep the earliest.
    fn max(mut self) -> Result<Self::Item>
    where
        Self::Item: Ord,
    {
        let mut best = self.try_next().ok_or(Error::Empty)?;
        while let Some(item) = self.try_next() {
            if item > best {
                best = item;
            }
        }
        Ok(best)
    }

    /// Run `f` over every remaining element.
    fn for_each<F>(mut self, mut f: F)
    where
        F: FnMut(Self::Item),
    {
        while let Some(item) = self.try_next() {
            f(item);
        }
    }

    /// Hand this chain to code that expects a standard iterator.
    fn iter(self) -> Iter<Self> {
        Iter::new(self)
    }
}

impl<E: Enumerator> ConsumeExt for E {}
