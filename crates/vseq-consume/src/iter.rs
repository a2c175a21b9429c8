//! Exit adapter to the standard pull-iteration protocol.

use vseq_core::enumerator::Enumerator;

/// Wraps an enumerator as a [`std::iter::Iterator`].
///
/// The bridge for consumers written against the conventional protocol:
/// `for` loops, `collect`, and the rest of the iterator ecosystem. The
/// size hint comes from the chain's count capability.
#[derive(Debug, Clone)]
pub struct Iter<E> {
    inner: E,
}

impl<E> Iter<E> {
    pub(crate) fn new(inner: E) -> Self {
        Iter { inner }
    }
}

impl<E: Enumerator> Iterator for Iter<E> {
    type Item = E::Item;

    fn next(&mut self) -> Option<E::Item> {
        self.inner.try_next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.inner.try_len() {
            Some(n) => (n, Some(n)),
            None => (0, None),
        }
    }
}
