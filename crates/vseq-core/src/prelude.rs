//! Convenience re-exports for downstream crates.

pub use crate::enumerator::{Enumerator, IntoEnumerator};
pub use crate::error::{Error, Result};
pub use crate::source::{
    empty, from_iter, from_slice, from_vec, once, range, repeat, sequence,
};
