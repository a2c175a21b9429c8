#![forbid(unsafe_code)]
//! vseq-core: shared kernel for the vseq sequence engine.
//!
//! This crate contains only *pure* types and traits. There is **no I/O** and
//! **no allocation beyond what a source adapter owns** here, by design.
//!
//! Crates that use this:
//! - vseq-operators: implements the stage combinators that wrap an inner
//!   [`Enumerator`](enumerator::Enumerator) and add one transformation each.
//! - vseq-consume: drives a composed chain to completion (terminal
//!   operations and the iterator exit adapter).

pub mod enumerator;
pub mod error;
pub mod prelude;
pub mod source;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
