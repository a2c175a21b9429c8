//! Predicate filtering.

use vseq_core::enumerator::Enumerator;

/// Keeps the elements its predicate accepts.
///
/// All three capability probes decline: how many elements pass, and where
/// they sit, is unknowable without enumerating.
#[derive(Debug, Clone)]
pub struct Filter<E, P> {
    inner: E,
    predicate: P,
}

impl<E, P> Filter<E, P> {
    pub(crate) fn new(inner: E, predicate: P) -> Self {
        Filter { inner, predicate }
    }
}

impl<E, P> Enumerator for Filter<E, P>
where
    E: Enumerator,
    P: FnMut(&E::Item) -> bool,
{
    type Item = E::Item;

    fn try_next(&mut self) -> Option<E::Item> {
        loop {
            let item = self.inner.try_next()?;
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
    }
}
