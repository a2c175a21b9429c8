//! End-relative windows: `take_last` and `skip_last`.
//!
//! An end-relative bound is resolvable only once the source's length is
//! known, but neither stage materializes the whole source: both stream
//! through a ring window of exactly `n` slots, so unbounded memory is never
//! required for `skip_last` and `take_last` holds `n` elements at peak.

use std::collections::VecDeque;

use vseq_core::enumerator::Enumerator;

/// The final `n` elements of the inner sequence.
///
/// Consumes the source on first pull, keeping a sliding window of the last
/// `n` elements seen; the source is released before emission begins.
pub struct TakeLast<E: Enumerator> {
    inner: Option<E>,
    n: usize,
    buf: VecDeque<E::Item>,
}

impl<E: Enumerator> TakeLast<E> {
    pub(crate) fn new(inner: E, n: usize) -> Self {
        TakeLast {
            inner: Some(inner),
            n,
            buf: VecDeque::new(),
        }
    }
}

impl<E: Enumerator> Enumerator for TakeLast<E> {
    type Item = E::Item;

    fn try_next(&mut self) -> Option<E::Item> {
        if self.n == 0 {
            // Nothing can come out; release the source without draining it.
            self.inner = None;
            return None;
        }
        if let Some(mut inner) = self.inner.take() {
            while let Some(item) = inner.try_next() {
                if self.buf.len() == self.n {
                    self.buf.pop_front();
                }
                self.buf.push_back(item);
            }
        }
        self.buf.pop_front()
    }

    fn try_len(&self) -> Option<usize> {
        match &self.inner {
            Some(inner) => inner.try_len().map(|l| l.min(self.n)),
            None => Some(self.buf.len()),
        }
    }
}

/// Everything but the final `n` elements of the inner sequence.
///
/// Emission is delayed by `n` slots: an element comes out only once `n`
/// newer elements stand behind it, so the last `n` never surface.
pub struct SkipLast<E: Enumerator> {
    inner: E,
    n: usize,
    buf: VecDeque<E::Item>,
}

impl<E: Enumerator> SkipLast<E> {
    pub(crate) fn new(inner: E, n: usize) -> Self {
        SkipLast {
            inner,
            n,
            buf: VecDeque::with_capacity(n.saturating_add(1)),
        }
    }
}

impl<E: Enumerator> Enumerator for SkipLast<E> {
    type Item = E::Item;

    fn try_next(&mut self) -> Option<E::Item> {
        loop {
            let item = self.inner.try_next()?;
            self.buf.push_back(item);
            if self.buf.len() > self.n {
                return self.buf.pop_front();
            }
        }
    }

    fn try_len(&self) -> Option<usize> {
        let n = self.inner.try_len()?;
        Some((n + self.buf.len()).saturating_sub(self.n))
    }
}
