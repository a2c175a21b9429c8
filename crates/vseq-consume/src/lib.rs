//! vseq-consume: drives a composed chain to completion.
//!
//! Terminal operations pull the outermost stage until exhaustion or early
//! exit, reaching for the chain's capability probes first and falling back
//! to element-by-element pulls when a probe declines. The [`Iter`] exit
//! adapter hands a chain to code that expects a standard iterator.

pub mod iter;
pub mod terminal;

pub use iter::Iter;
pub use terminal::ConsumeExt;
