//! `N`-bit signed two's-complement integer.

use crate::ops::{add_bytes, mul_into, sub_bytes};
use crate::u::U;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Mul, Sub};
use numeric_bits::W;
use numeric_traits::error::{Error, Result};

/// An `N`-bit two's-complement signed integer: a [`W<N>`] whose sign is bit `N - 1`.
/// `min(S<N>) == -2^(N-1)`, `max(S<N>) == 2^(N-1) - 1`. `S<1>` represents `{-1, 0}`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct S<const N: usize, const BYTES: usize>(pub(crate) W<N, BYTES>);

impl<const N: usize, const BYTES: usize> S<N, BYTES> {
    /// The value zero.
    #[must_use]
    pub const fn zero() -> Self {
        S(W::zero())
    }

    /// Whether this value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Whether the sign bit (bit `N - 1`) is set.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.get_bit(N - 1)
    }

    /// View the underlying bit container.
    #[must_use]
    pub const fn bits(&self) -> W<N, BYTES> {
        self.0
    }

    /// Wrap a bit container as a signed integer.
    #[must_use]
    pub const fn from_bits(bits: W<N, BYTES>) -> Self {
        S(bits)
    }

    /// Construct from a native `i128`, truncating the two's-complement pattern if it doesn't fit.
    #[must_use]
    pub fn from_i128(val: i128) -> Self {
        let src = val.to_le_bytes();
        let mut bytes = [0u8; BYTES];
        for i in 0..BYTES.min(16) {
            bytes[i] = src[i];
        }
        S(W::from_le_bytes(bytes))
    }

    /// Widen to a native `i128` via sign extension. Requires `N <= 128`.
    #[must_use]
    pub fn to_i128(&self) -> i128 {
        debug_assert!(N <= 128, "to_i128 requires N <= 128");
        let wide: W<128, 16> = self.0.width_cast(true);
        i128::from_le_bytes(wide.to_le_bytes())
    }

    /// Bitwise-not plus one. Negating `min(S<N>)` yields `min(S<N>)` again (documented wrap).
    #[must_use]
    pub fn negate(&self) -> Self {
        let inverted = !self.0;
        let mut one: W<N, BYTES> = W::zero();
        one.set_bit(0, true);
        S(W::from_le_bytes(add_bytes(
            inverted.to_le_bytes(),
            one.to_le_bytes(),
        )))
    }

    /// Absolute value; wraps (returns `min`) when `self == min(S<N>)`.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            self.negate()
        } else {
            *self
        }
    }

    /// Absolute value promoted to `S<N+1>`, exact even for `min(S<N>)`.
    #[must_use]
    pub fn expanding_abs<const M: usize, const MB: usize>(&self) -> S<M, MB> {
        assert_eq!(M, N + 1, "expanding_abs must widen by exactly one bit");
        let wide: W<M, MB> = self.0.width_cast(true);
        S(wide).abs()
    }

    /// Unsigned magnitude, as a same-width `U<N>`. Exact even for `min(S<N>)`, whose bit pattern
    /// read as unsigned is exactly `2^(N-1)`.
    #[must_use]
    pub fn magnitude(&self) -> U<N, BYTES> {
        if self.is_negative() {
            U::from_bits(self.negate().0)
        } else {
            U::from_bits(self.0)
        }
    }

    /// Sum with no truncation: `S<N> x S<N> -> S<N+1>`.
    #[must_use]
    pub fn expanding_add<const M: usize, const MB: usize>(&self, rhs: &Self) -> S<M, MB> {
        assert_eq!(M, N + 1, "expanding_add must widen by exactly one bit");
        let a: W<M, MB> = self.0.width_cast(true);
        let b: W<M, MB> = rhs.0.width_cast(true);
        S(W::from_le_bytes(add_bytes(a.to_le_bytes(), b.to_le_bytes())))
    }

    /// Difference with no truncation: `S<N> x S<N> -> S<N+1>`.
    #[must_use]
    pub fn expanding_sub<const M: usize, const MB: usize>(&self, rhs: &Self) -> S<M, MB> {
        assert_eq!(M, N + 1, "expanding_sub must widen by exactly one bit");
        let a: W<M, MB> = self.0.width_cast(true);
        let b: W<M, MB> = rhs.0.width_cast(true);
        S(W::from_le_bytes(sub_bytes(a.to_le_bytes(), b.to_le_bytes())))
    }

    /// Product with no truncation: `S<N> x S<N> -> S<2N>`, computed via sign/magnitude.
    #[must_use]
    pub fn expanding_mul<const M: usize, const MB: usize>(&self, rhs: &Self) -> S<M, MB> {
        assert_eq!(M, 2 * N, "expanding_mul must double the width");
        let a_mag = self.magnitude();
        let b_mag = rhs.magnitude();
        let wide_mag: U<M, MB> = a_mag.expanding_mul(&b_mag);
        let mut result = S(wide_mag.bits());
        if self.is_negative() ^ rhs.is_negative() {
            result = result.negate();
        }
        result
    }

    /// Truncated-toward-zero division and remainder. Sign of the quotient is the xor of operand
    /// signs; the remainder takes the sign of the dividend. Fails with
    /// [`Error::DivisionByZero`] if `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (q_mag, r_mag) = self.magnitude().div_rem(&rhs.magnitude())?;
        let mut q = S::from_bits(q_mag.bits());
        if self.is_negative() ^ rhs.is_negative() {
            q = q.negate();
        }
        let mut r = S::from_bits(r_mag.bits());
        if self.is_negative() {
            r = r.negate();
        }
        Ok((q, r))
    }

    /// Truncate (narrowing) or sign-extend (widening) to a new width.
    #[must_use]
    pub fn width_cast<const M: usize, const MB: usize>(&self) -> S<M, MB> {
        S(self.0.width_cast(true))
    }

    /// Narrowing cast, failing with [`Error::Overflow`] if the value does not fit in `M` bits.
    pub fn narrow_cast<const M: usize, const MB: usize>(&self) -> Result<S<M, MB>> {
        let narrowed: S<M, MB> = self.width_cast();
        let back: Self = narrowed.width_cast();
        if back == *self {
            Ok(narrowed)
        } else {
            Err(Error::Overflow)
        }
    }

    /// Decimal string: `-` prefix for negative values, then the magnitude's decimal.
    #[must_use]
    pub fn to_decimal(&self) -> String {
        if self.is_negative() {
            format!("-{}", self.magnitude().to_decimal())
        } else {
            self.magnitude().to_decimal()
        }
    }
}

impl<const N: usize, const BYTES: usize> Add for S<N, BYTES> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        S(W::from_le_bytes(add_bytes(
            self.0.to_le_bytes(),
            rhs.0.to_le_bytes(),
        )))
    }
}

impl<const N: usize, const BYTES: usize> Sub for S<N, BYTES> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        S(W::from_le_bytes(sub_bytes(
            self.0.to_le_bytes(),
            rhs.0.to_le_bytes(),
        )))
    }
}

impl<const N: usize, const BYTES: usize> Mul for S<N, BYTES> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        S(mul_into::<N, BYTES, N, BYTES>(self.0, rhs.0))
    }
}

impl<const N: usize, const BYTES: usize> PartialOrd for S<N, BYTES> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize, const BYTES: usize> Ord for S<N, BYTES> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.magnitude().cmp(&other.magnitude()),
            (true, true) => other.magnitude().cmp(&self.magnitude()),
        }
    }
}

impl<const N: usize, const BYTES: usize> fmt::Debug for S<N, BYTES> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S<{N}>({})", self.to_decimal())
    }
}

impl<const N: usize, const BYTES: usize> fmt::Display for S<N, BYTES> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negate_and_abs() {
        let a = S::<8, 1>::from_i128(5);
        assert_eq!(a.negate().to_i128(), -5);
        let min = S::<8, 1>::from_i128(-128);
        assert_eq!(min.negate().to_i128(), -128); // documented wrap
        assert_eq!(min.abs().to_i128(), -128);
    }

    #[test]
    fn test_expanding_abs_exact_at_min() {
        let min = S::<8, 1>::from_i128(-128);
        let abs: S<9, 2> = min.expanding_abs();
        assert_eq!(abs.to_i128(), 128);
    }

    #[test]
    fn test_expanding_add_e2() {
        // E2: S<8>(-128) + S<8>(-1), expanding -> S<9>(-129)
        let a = S::<8, 1>::from_i128(-128);
        let b = S::<8, 1>::from_i128(-1);
        let sum: S<9, 2> = a.expanding_add(&b);
        assert_eq!(sum.to_i128(), -129);
    }

    #[test]
    fn test_div_rem_truncates_toward_zero() {
        let a = S::<8, 1>::from_i128(-7);
        let b = S::<8, 1>::from_i128(2);
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q.to_i128(), -3);
        assert_eq!(r.to_i128(), -1);
    }

    #[test]
    fn test_div_by_zero() {
        let a = S::<8, 1>::from_i128(4);
        let z = S::<8, 1>::zero();
        assert_eq!(a.div_rem(&z), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_comparisons() {
        let neg = S::<8, 1>::from_i128(-5);
        let pos = S::<8, 1>::from_i128(3);
        let neg2 = S::<8, 1>::from_i128(-10);
        assert!(neg < pos);
        assert!(neg2 < neg);
    }

    #[test]
    fn test_to_decimal() {
        assert_eq!(S::<8, 1>::from_i128(-12).to_decimal(), "-12");
        assert_eq!(S::<8, 1>::from_i128(12).to_decimal(), "12");
        assert_eq!(S::<8, 1>::zero().to_decimal(), "0");
    }
}
