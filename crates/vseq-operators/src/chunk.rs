//! Fixed-size batching.

use vseq_core::enumerator::Enumerator;

/// Groups consecutive elements into `Vec`s of `size`; the final chunk may be
/// shorter. The size is validated at the constructing call.
#[derive(Debug, Clone)]
pub struct Chunk<E> {
    inner: E,
    size: usize,
}

impl<E> Chunk<E> {
    pub(crate) fn new(inner: E, size: usize) -> Self {
        assert!(size != 0, "chunk requires a nonzero size");
        Chunk { inner, size }
    }
}

impl<E: Enumerator> Enumerator for Chunk<E> {
    type Item = Vec<E::Item>;

    fn try_next(&mut self) -> Option<Vec<E::Item>> {
        let mut chunk = Vec::new();
        while chunk.len() < self.size {
            match self.inner.try_next() {
                Some(item) => chunk.push(item),
                None => break,
            }
        }
        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }

    fn try_len(&self) -> Option<usize> {
        self.inner.try_len().map(|l| l.div_ceil(self.size))
    }
}
