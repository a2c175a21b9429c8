//! Hash-indexed join family.
//!
//! Every variant builds a key index over one side before producing any
//! output — the one place in the operator set that cannot stream — then
//! drives the other side through it. Output order follows the driven side;
//! matches within one driven element follow the indexed side's arrival
//! order.

mod group;
mod index;
mod inner;
mod outer;

pub use group::GroupJoin;
pub use inner::Join;
pub use outer::{LeftJoin, RightJoin};

pub(crate) use index::Lookup;
