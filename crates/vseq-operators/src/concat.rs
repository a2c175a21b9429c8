//! Sequence concatenation.

use vseq_core::enumerator::Enumerator;

/// The first sequence, then the second.
#[derive(Debug, Clone)]
pub struct Concat<A, B> {
    first: A,
    second: B,
}

impl<A, B> Concat<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Concat { first, second }
    }
}

impl<A, B> Enumerator for Concat<A, B>
where
    A: Enumerator,
    B: Enumerator<Item = A::Item>,
{
    type Item = A::Item;

    fn try_next(&mut self) -> Option<A::Item> {
        if let Some(item) = self.first.try_next() {
            return Some(item);
        }
        self.second.try_next()
    }

    fn try_len(&self) -> Option<usize> {
        self.first.try_len()?.checked_add(self.second.try_len()?)
    }
}
