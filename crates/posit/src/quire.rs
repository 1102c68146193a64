//! `Q<N, ES>`: the exact fixed-point accumulator for sums of posit products.
//!
//! Stable Rust can't derive the quire's bit width from `N`/`ES` in a return-type position, so
//! (following the same pattern used throughout `numeric-bits`/`numeric-ints` for width-changing
//! operations) callers supply the width explicitly as extra const generics and every constructor
//! asserts it against [`quire_width`].

use crate::decode::{decode, Decode, FRAC_BITS};
use numeric_bits::W;
use numeric_ints::S;

/// Minimum carry/guard bits kept above the value field, per the specification's `C >= 30`.
const CARRY_BITS: usize = 30;

/// `I = 2^ES * (N - 2)`: the quire's per-side (integer or fractional) value width.
#[must_use]
pub const fn quire_integer_width(n: usize, es: usize) -> usize {
    (1usize << es) * (n - 2)
}

const fn next_pow2(x: usize) -> usize {
    let mut p = 1usize;
    while p < x {
        p <<= 1;
    }
    p
}

/// Total quire width: `1 + 2I + C` bits, rounded up to the next power of two.
#[must_use]
pub const fn quire_width(n: usize, es: usize) -> usize {
    let i = quire_integer_width(n, es);
    next_pow2(1 + 2 * i + CARRY_BITS)
}

/// The exact accumulator for posit products. `QBITS`/`QBYTES` must equal
/// [`quire_width`]`(N, ES)` and its byte count; every constructor asserts this.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Q<const N: usize, const ES: usize, const QBITS: usize, const QBYTES: usize> {
    value: S<QBITS, QBYTES>,
    is_nar: bool,
}

impl<const N: usize, const ES: usize, const QBITS: usize, const QBYTES: usize> Q<N, ES, QBITS, QBYTES> {
    fn check_width() {
        assert_eq!(QBITS, quire_width(N, ES), "QBITS must equal quire_width(N, ES)");
        assert_eq!(QBYTES, QBITS.div_ceil(8), "QBYTES must equal ceil(QBITS / 8)");
    }

    /// The zero quire.
    #[must_use]
    pub fn zero() -> Self {
        Self::check_width();
        Q {
            value: S::zero(),
            is_nar: false,
        }
    }

    /// The distinguished Not-a-Real quire.
    #[must_use]
    pub fn nar() -> Self {
        Self::check_width();
        Q {
            value: S::zero(),
            is_nar: true,
        }
    }

    #[must_use]
    pub fn is_nar(&self) -> bool {
        self.is_nar
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        !self.is_nar && self.value.is_zero()
    }

    /// Build the quire holding exactly one posit's value (exact, no rounding).
    #[must_use]
    pub fn from_posit(p: crate::P<N, ES>) -> Self {
        Self::check_width();
        if p.is_nar() {
            return Self::nar();
        }
        let raw = p.to_bits();
        let value = match decode::<N, ES>(raw) {
            Decode::Zero => S::zero(),
            Decode::NaR => unreachable!(),
            Decode::Regular(d) => {
                let i = quire_integer_width(N, ES) as i64;
                let base = d.scale - FRAC_BITS as i64 + i;
                let mag = place_bits::<QBITS, QBYTES>(d.sig, FRAC_BITS, base);
                if d.sign {
                    mag.negate()
                } else {
                    mag
                }
            }
        };
        Q { value, is_nar: false }
    }

    /// Add the exact product `a * b` into this quire, with no intermediate rounding.
    #[must_use]
    pub fn add_product(self, a: crate::P<N, ES>, b: crate::P<N, ES>) -> Self {
        if self.is_nar || a.is_nar() || b.is_nar() {
            return Self::nar();
        }
        let (da, db) = (decode::<N, ES>(a.to_bits()), decode::<N, ES>(b.to_bits()));
        let (da, db) = match (da, db) {
            (Decode::Zero, _) | (_, Decode::Zero) => return self,
            (Decode::Regular(da), Decode::Regular(db)) => (da, db),
            _ => unreachable!(),
        };
        let sign = da.sign != db.sign;
        let scale = da.scale + db.scale;
        let sig = da.sig * db.sig;
        let i = quire_integer_width(N, ES) as i64;
        let base = scale - 2 * FRAC_BITS as i64 + i;
        let mag = place_bits::<QBITS, QBYTES>(sig, 2 * FRAC_BITS, base);
        let contribution = if sign { mag.negate() } else { mag };
        Q {
            value: self.value + contribution,
            is_nar: false,
        }
    }

    /// Round the accumulated value to the nearest posit (ties to even), once.
    #[must_use]
    pub fn to_posit(self) -> crate::P<N, ES> {
        if self.is_nar {
            return crate::P::nar();
        }
        if self.value.is_zero() {
            return crate::P::zero();
        }
        let negative = self.value.is_negative();
        let mag = self.value.magnitude();
        let i = quire_integer_width(N, ES) as i64;

        let bits = mag.bits();
        let msb = bits.count_leading_zeros();
        let top = QBITS - 1 - msb;
        // Value = mag * 2^(-I); the bit at position `top` has weight 2^(top - I).
        let scale = top as i64 - i;
        let shift = top as i64 - FRAC_BITS as i64;
        let mut sig: u128 = 0;
        let mut sticky = false;
        for dest_bit in 0..=FRAC_BITS {
            let src_bit = dest_bit as i64 + shift;
            if src_bit >= 0 && (src_bit as usize) < QBITS && bits.get_bit(src_bit as usize) {
                sig |= 1u128 << dest_bit;
            }
        }
        if shift > 0 {
            for src_bit in 0..shift.min(QBITS as i64) {
                if bits.get_bit(src_bit as usize) {
                    sticky = true;
                    break;
                }
            }
        }
        let raw = crate::encode::encode::<N, ES>(negative, scale, sig, sticky);
        crate::P::from_bits(raw)
    }
}

/// Place the low `hidden_bit + 1` bits of `sig` (a significand with its hidden bit at
/// `hidden_bit`) into a `QBITS`-wide unsigned magnitude, with `sig`'s bit 0 landing at `base`.
fn place_bits<const QBITS: usize, const QBYTES: usize>(
    sig: u128,
    hidden_bit: u32,
    base: i64,
) -> S<QBITS, QBYTES> {
    let mut w: W<QBITS, QBYTES> = W::zero();
    for bit_idx in 0..=hidden_bit {
        if (sig >> bit_idx) & 1 != 0 {
            let pos = base + bit_idx as i64;
            if pos >= 0 && (pos as usize) < QBITS {
                w.set_bit(pos as usize, true);
            }
        }
    }
    S::from_bits(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quire_width_e7() {
        // E7: quire_width(32, 2) == 512
        assert_eq!(quire_width(32, 2), 512);
    }

    #[test]
    fn test_quire_from_posit_roundtrip() {
        let one = crate::P::<8, 2>::one();
        let q: Q<8, 2, { quire_width(8, 2) }, { quire_width(8, 2).div_ceil(8) }> = Q::from_posit(one);
        assert_eq!(q.to_posit(), one);
    }

    #[test]
    fn test_quire_accumulates_exactly() {
        let one = crate::P::<8, 2>::one();
        let two = one + one;
        let q: Q<8, 2, { quire_width(8, 2) }, { quire_width(8, 2).div_ceil(8) }> = Q::zero();
        let q = q.add_product(one, one).add_product(one, one);
        assert_eq!(q.to_posit(), two);
    }

    #[test]
    fn test_quire_nar_propagates() {
        let nar = crate::P::<8, 2>::nar();
        let one = crate::P::<8, 2>::one();
        let q: Q<8, 2, { quire_width(8, 2) }, { quire_width(8, 2).div_ceil(8) }> = Q::from_posit(nar);
        assert!(q.is_nar());
        let q2: Q<8, 2, { quire_width(8, 2) }, { quire_width(8, 2).div_ceil(8) }> = Q::zero();
        assert!(q2.add_product(nar, one).is_nar());
    }
}
