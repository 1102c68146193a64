//! Arbitrary-width binary numeric types: bit containers, integers, floats, and
//! posits/quires/valids for hardware and approximate-computing research.
//!
//! This crate is a thin facade re-exporting the layered `numeric-*` crates:
//! - [`bits`]: `W<N, BYTES>`, the fixed-width bit container (L1).
//! - [`ints`]: `U<N, BYTES>`/`S<N, BYTES>`, unsigned/signed integers, and `IntegerRange` (L2).
//! - [`reals`]: `F<E, M>`, parameterised IEEE-754-style binary floats (L3).
//! - [`posit`]: `P<N, ES>`, `Q<N, ES>`, and the `V<N, ES>`/`Bound`/`Tile` interval subsystem (L4).

pub use numeric_bits as bits;
pub use numeric_ints as ints;
pub use numeric_posit as posit;
pub use numeric_reals as reals;
pub use numeric_traits as traits;
pub use numeric_utils as utils;

pub use numeric_bits::W;
pub use numeric_ints::{IntegerRange, S, U};
pub use numeric_posit::{quire_integer_width, quire_width, Bound, BoundSign, IntervalBound, Tile, P, Q, V};
pub use numeric_reals::F;
