//! Lazy pseudo-random permutation.

use std::sync::atomic::{AtomicU64, Ordering};

use vseq_core::enumerator::Enumerator;

/// Emits the source's elements in uniformly random order.
///
/// The source is materialized into an owned buffer on the first pull, not at
/// construction. Each pull then draws uniformly over the not-yet-emitted
/// remainder, swaps the pick to the end of the buffer, and pops it — one
/// draw and one swap per element, so `shuffle().take(m)` touches `m` slots
/// after the one-time buffer fill and the rest of the buffer is never moved.
pub struct Shuffle<E: Enumerator> {
    inner: Option<E>,
    buf: Vec<E::Item>,
    rng: SplitMix64,
}

impl<E: Enumerator> Shuffle<E> {
    pub(crate) fn new(inner: E, seed: u64) -> Self {
        Shuffle {
            inner: Some(inner),
            buf: Vec::new(),
            rng: SplitMix64::new(seed),
        }
    }
}

impl<E: Enumerator> Enumerator for Shuffle<E> {
    type Item = E::Item;

    fn try_next(&mut self) -> Option<E::Item> {
        if let Some(mut inner) = self.inner.take() {
            let mut buf = match inner.try_len() {
                Some(n) => Vec::with_capacity(n),
                None => Vec::new(),
            };
            while let Some(item) = inner.try_next() {
                buf.push(item);
            }
            #[cfg(feature = "tracing")]
            tracing::trace!(len = buf.len(), "materialized shuffle buffer");
            self.buf = buf;
        }
        let len = self.buf.len();
        if len == 0 {
            return None;
        }
        let pick = self.rng.below(len as u64) as usize;
        self.buf.swap(pick, len - 1);
        self.buf.pop()
    }

    fn try_len(&self) -> Option<usize> {
        match &self.inner {
            Some(inner) => inner.try_len(),
            None => Some(self.buf.len()),
        }
    }
}

/// Seed a shuffle from process entropy.
///
/// Mixes the process id, the wall clock, and a per-call counter through
/// blake3 so concurrent constructions in the same instant diverge.
pub(crate) fn entropy_seed() -> u64 {
    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let mut hasher = blake3::Hasher::new();
    hasher.update(&std::process::id().to_le_bytes());
    hasher.update(&COUNTER.fetch_add(1, Ordering::Relaxed).to_le_bytes());
    if let Ok(elapsed) = std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
        hasher.update(&elapsed.as_nanos().to_le_bytes());
    }
    let digest = hasher.finalize();
    let mut seed = [0u8; 8];
    seed.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(seed)
}

/// SplitMix64 generator; one u64 of state, full 2^64 period.
#[derive(Debug, Clone)]
struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        SplitMix64 { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform draw in `[0, bound)` via widening multiply.
    fn below(&mut self, bound: u64) -> u64 {
        (((self.next() as u128) * (bound as u128)) >> 64) as u64
    }
}
