//! Key-ordered emission.

use vseq_core::enumerator::Enumerator;

/// Emits the source sorted by a derived key.
///
/// Materializes on first pull and sorts stably with precomputed keys, so
/// elements with equal keys keep their source order — in descending runs
/// too, since the comparator is flipped rather than the output reversed.
pub struct OrderBy<E: Enumerator, F, K> {
    inner: Option<E>,
    key: F,
    descending: bool,
    sorted: std::vec::IntoIter<(K, E::Item)>,
}

impl<E: Enumerator, F, K> OrderBy<E, F, K> {
    pub(crate) fn new(inner: E, key: F, descending: bool) -> Self {
        OrderBy {
            inner: Some(inner),
            key,
            descending,
            sorted: Vec::new().into_iter(),
        }
    }
}

impl<E, F, K> Enumerator for OrderBy<E, F, K>
where
    E: Enumerator,
    F: FnMut(&E::Item) -> K,
    K: Ord,
{
    type Item = E::Item;

    fn try_next(&mut self) -> Option<E::Item> {
        if let Some(mut inner) = self.inner.take() {
            let mut decorated: Vec<(K, E::Item)> = match inner.try_len() {
                Some(n) => Vec::with_capacity(n),
                None => Vec::new(),
            };
            while let Some(item) = inner.try_next() {
                let key = (self.key)(&item);
                decorated.push((key, item));
            }
            if self.descending {
                decorated.sort_by(|a, b| b.0.cmp(&a.0));
            } else {
                decorated.sort_by(|a, b| a.0.cmp(&b.0));
            }
            #[cfg(feature = "tracing")]
            tracing::trace!(len = decorated.len(), "materialized sort buffer");
            self.sorted = decorated.into_iter();
        }
        self.sorted.next().map(|(_, item)| item)
    }

    fn try_len(&self) -> Option<usize> {
        match &self.inner {
            Some(inner) => inner.try_len(),
            None => Some(self.sorted.len()),
        }
    }
}
