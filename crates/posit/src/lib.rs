//! Tapered-precision posits (L4): `P<N, ES>` arithmetic, the exact `Q<N, ES>` quire accumulator,
//! and the `V<N, ES>` valid/bound/tile interval subsystem, built over a `u128` scratch register.
//!
//! Part of the `numeric` project

pub(crate) mod arith;
pub(crate) mod decode;
pub(crate) mod encode;
mod posit;
mod quire;
mod valid;

pub use posit::P;
pub use quire::{quire_integer_width, quire_width, Q};
pub use valid::{Bound, BoundSign, IntervalBound, Tile, V};
