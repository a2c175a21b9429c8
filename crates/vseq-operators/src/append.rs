//! Single-element suffix and prefix stages.
//!
//! Chained `append`/`prepend` calls compose in call order, and a cloned
//! prefix of a chain re-enumerates unaffected by stages added afterwards.

use vseq_core::enumerator::Enumerator;

/// The inner sequence followed by one extra element.
pub struct Append<E: Enumerator> {
    inner: E,
    item: Option<E::Item>,
}

impl<E: Enumerator> Append<E> {
    pub(crate) fn new(inner: E, item: E::Item) -> Self {
        Append {
            inner,
            item: Some(item),
        }
    }
}

impl<E: Enumerator + Clone> Clone for Append<E>
where
    E::Item: Clone,
{
    fn clone(&self) -> Self {
        Append {
            inner: self.inner.clone(),
            item: self.item.clone(),
        }
    }
}

impl<E: Enumerator> Enumerator for Append<E> {
    type Item = E::Item;

    fn try_next(&mut self) -> Option<E::Item> {
        if let Some(item) = self.inner.try_next() {
            return Some(item);
        }
        self.item.take()
    }

    fn try_len(&self) -> Option<usize> {
        let extra = if self.item.is_some() { 1 } else { 0 };
        self.inner.try_len().map(|l| l.saturating_add(extra))
    }
}

/// One extra element followed by the inner sequence.
///
/// The source is not touched until the prefix element has been handed out.
pub struct Prepend<E: Enumerator> {
    item: Option<E::Item>,
    inner: E,
}

impl<E: Enumerator> Prepend<E> {
    pub(crate) fn new(inner: E, item: E::Item) -> Self {
        Prepend {
            item: Some(item),
            inner,
        }
    }
}

impl<E: Enumerator + Clone> Clone for Prepend<E>
where
    E::Item: Clone,
{
    fn clone(&self) -> Self {
        Prepend {
            item: self.item.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<E: Enumerator> Enumerator for Prepend<E> {
    type Item = E::Item;

    fn try_next(&mut self) -> Option<E::Item> {
        if let Some(item) = self.item.take() {
            return Some(item);
        }
        self.inner.try_next()
    }

    fn try_len(&self) -> Option<usize> {
        let extra = if self.item.is_some() { 1 } else { 0 };
        self.inner.try_len().map(|l| l.saturating_add(extra))
    }
}
