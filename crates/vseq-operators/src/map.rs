//! Element projection.

use vseq_core::enumerator::Enumerator;

/// Applies a function to every element.
///
/// The count survives projection; the slice and copy probes decline because
/// the outputs are synthesized, not resident anywhere.
#[derive(Debug, Clone)]
pub struct Map<E, F> {
    inner: E,
    f: F,
}

impl<E, F> Map<E, F> {
    pub(crate) fn new(inner: E, f: F) -> Self {
        Map { inner, f }
    }
}

impl<E, F, R> Enumerator for Map<E, F>
where
    E: Enumerator,
    F: FnMut(E::Item) -> R,
{
    type Item = R;

    fn try_next(&mut self) -> Option<R> {
        self.inner.try_next().map(&mut self.f)
    }

    fn try_len(&self) -> Option<usize> {
        self.inner.try_len()
    }
}
