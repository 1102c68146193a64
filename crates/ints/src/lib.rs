//! Arbitrary-width two's-complement integers (L2): unsigned `U<N>` and signed `S<N>` over the
//! L1 bit container, with expanding arithmetic, restoring division, cross-width comparison, and
//! decimal/hex/octal/binary conversion via binary-coded decimal.
//!
//! Part of the `numeric` project

mod ops;
mod random;
mod range;
mod s;
mod u;

pub use random::{uniform_uinteger_distribution, RandomBitSource};
pub use range::IntegerRange;
pub use s::S;
pub use u::U;
