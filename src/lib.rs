//! vseq: value-type lazy sequence chains.
//!
//! A chain of sequence transformations composes into one stack-placed
//! enumerator state machine — each stage a distinct struct parameterized by
//! its inner stage's concrete type — instead of a tower of heap-boxed
//! iterators. Sources and stages implement a four-operation capability
//! contract: a mandatory pull primitive plus three optional bulk probes
//! (count, contiguous view, direct copy) that degrade gracefully through
//! any chain.
//!
//! ```
//! use vseq::prelude::*;
//!
//! let words = ["fir", "oak", "elm", "yew", "ash"];
//! let picked = from_slice(&words)
//!     .filter(|w| *w != "oak")
//!     .skip(1)
//!     .take(2)
//!     .to_vec();
//! assert_eq!(picked, ["elm", "yew"]);
//! ```

pub use vseq_consume::{ConsumeExt, Iter};
pub use vseq_core::enumerator::{Enumerator, IntoEnumerator};
pub use vseq_core::error::{Error, Result};
pub use vseq_core::source;
pub use vseq_operators::SeqExt;

/// Everything a chain-building call site needs.
pub mod prelude {
    pub use vseq_consume::ConsumeExt;
    pub use vseq_core::enumerator::{Enumerator, IntoEnumerator};
    pub use vseq_core::error::{Error, Result};
    pub use vseq_core::source::{
        empty, from_iter, from_slice, from_vec, once, range, repeat, sequence,
    };
    pub use vseq_operators::SeqExt;
}
