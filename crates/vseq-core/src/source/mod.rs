//! Entry adapters: wrap buffers, containers, generators, and pull-based
//! iterators in the capability contract.

mod generate;
mod iter;
mod numeric;
mod slice;
mod vec;

pub use generate::{empty, once, repeat, Empty, Once, Repeat};
pub use iter::{from_iter, FromIter};
pub use numeric::{range, sequence, FromRange, FromSequence, Numeric};
pub use slice::{from_slice, FromSlice};
pub use vec::{from_vec, FromVec};
