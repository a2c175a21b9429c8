//! Contiguous sub-range windows: `take` and `skip`.
//!
//! Both operators produce the same stage: an effective `[skip, skip+limit)`
//! window over the inner sequence. Re-slicing a window collapses into the
//! existing stage instead of nesting a second one, so `take`/`skip` chains
//! of any length cost one stage and one pass.

use vseq_core::enumerator::Enumerator;

/// An effective `[skip, skip+limit)` window over the inner sequence.
///
/// A `limit` of `None` is an unbounded tail. Zero-sized windows produce
/// nothing and never pull the inner enumerator, so they terminate even over
/// unbounded sources.
#[derive(Debug, Clone)]
pub struct Slice<E> {
    inner: E,
    skip: usize,
    limit: Option<usize>,
}

impl<E> Slice<E> {
    pub(crate) fn new(inner: E, skip: usize, limit: Option<usize>) -> Self {
        Slice { inner, skip, limit }
    }

    /// Keep at most `count` elements of the current window.
    ///
    /// Collapses into this stage; shadows the extension-trait method.
    pub fn take(self, count: usize) -> Slice<E> {
        let limit = match self.limit {
            Some(l) => l.min(count),
            None => count,
        };
        Slice {
            inner: self.inner,
            skip: self.skip,
            limit: Some(limit),
        }
    }

    /// Drop `count` elements from the front of the current window.
    ///
    /// Collapses into this stage; shadows the extension-trait method.
    pub fn skip(self, count: usize) -> Slice<E> {
        Slice {
            inner: self.inner,
            skip: self.skip.saturating_add(count),
            limit: self.limit.map(|l| l.saturating_sub(count)),
        }
    }
}

impl<E: Enumerator> Enumerator for Slice<E> {
    type Item = E::Item;

    fn try_next(&mut self) -> Option<E::Item> {
        if self.limit == Some(0) {
            return None;
        }
        while self.skip > 0 {
            self.skip -= 1;
            self.inner.try_next()?;
        }
        let item = self.inner.try_next()?;
        if let Some(l) = &mut self.limit {
            *l -= 1;
        }
        Some(item)
    }

    fn try_len(&self) -> Option<usize> {
        let n = self.inner.try_len()?;
        let after_skip = n.saturating_sub(self.skip);
        Some(match self.limit {
            Some(l) => l.min(after_skip),
            None => after_skip,
        })
    }

    fn try_as_slice(&self) -> Option<&[E::Item]> {
        let s = self.inner.try_as_slice()?;
        let start = self.skip.min(s.len());
        let end = match self.limit {
            Some(l) => start.saturating_add(l).min(s.len()),
            None => s.len(),
        };
        Some(&s[start..end])
    }

    fn try_copy_to(&self, dest: &mut [E::Item], offset: usize) -> Option<usize>
    where
        E::Item: Clone,
    {
        let want = match self.limit {
            Some(l) => l.saturating_sub(offset),
            None => usize::MAX,
        };
        let n = dest.len().min(want);
        self.inner
            .try_copy_to(&mut dest[..n], self.skip.saturating_add(offset))
    }
}
