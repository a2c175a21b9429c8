//! One-to-many projection with sequential flattening.

use vseq_core::enumerator::{Enumerator, IntoEnumerator};

/// Maps each outer element to a sequence and flattens the results.
///
/// Owns the outer enumerator plus, at any moment, at most one live inner
/// enumerator. The current inner is dropped before the outer advances, and
/// `inner` is declared before `outer` so stage drop releases them in that
/// same order — a hard invariant for nested resource scenarios, not a
/// stylistic choice.
#[derive(Debug, Clone)]
pub struct FlatMap<E, I, F> {
    inner: Option<I>,
    outer: E,
    f: F,
}

impl<E, I, F> FlatMap<E, I, F> {
    pub(crate) fn new(outer: E, f: F) -> Self {
        FlatMap {
            inner: None,
            outer,
            f,
        }
    }
}

impl<E, S, F> Enumerator for FlatMap<E, S::IntoEnum, F>
where
    E: Enumerator,
    S: IntoEnumerator,
    F: FnMut(E::Item) -> S,
{
    type Item = S::Item;

    fn try_next(&mut self) -> Option<S::Item> {
        loop {
            if let Some(active) = &mut self.inner {
                if let Some(item) = active.try_next() {
                    return Some(item);
                }
            }
            // Release the exhausted inner before touching the outer.
            self.inner = None;
            let outer_item = self.outer.try_next()?;
            self.inner = Some((self.f)(outer_item).into_enumerator());
        }
    }
}
