//! vseq-operators: stage combinators over the capability contract.
//!
//! Each combinator is a distinct struct parameterized by the concrete type
//! of the inner enumerator it wraps, so a composed chain is one stack-placed
//! value with static dispatch end to end — no shared iterator base class, no
//! boxing. Constructors only capture configuration; a stage touches its
//! source for the first time when the chain is pulled.
//!
//! The chaining surface is the [`SeqExt`] extension trait, implemented for
//! every enumerator.

pub mod aggregate_by;
pub mod append;
pub mod chunk;
pub mod concat;
pub mod distinct;
pub mod ext;
pub mod filter;
pub mod flat_map;
pub mod join;
pub mod map;
pub mod order_by;
pub mod shuffle;
pub mod slice;
pub mod tail;
pub mod zip;

pub use ext::SeqExt;
