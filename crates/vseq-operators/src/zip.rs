//! Lockstep pairing of two sequences.

use vseq_core::enumerator::Enumerator;

/// Advances both sources together and stops at the first exhaustion.
///
/// Both sources are released at that point — including the one that still
/// had elements — rather than at stage drop.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    pair: Option<(A, B)>,
}

impl<A, B> Zip<A, B> {
    pub(crate) fn new(a: A, b: B) -> Self {
        Zip { pair: Some((a, b)) }
    }
}

impl<A: Enumerator, B: Enumerator> Enumerator for Zip<A, B> {
    type Item = (A::Item, B::Item);

    fn try_next(&mut self) -> Option<(A::Item, B::Item)> {
        let (a, b) = self.pair.as_mut()?;
        match (a.try_next(), b.try_next()) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => {
                self.pair = None;
                None
            }
        }
    }

    fn try_len(&self) -> Option<usize> {
        match &self.pair {
            Some((a, b)) => Some(a.try_len()?.min(b.try_len()?)),
            None => Some(0),
        }
    }
}
