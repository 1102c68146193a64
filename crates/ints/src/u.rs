//! `N`-bit unsigned two's-complement integer.

use crate::ops::{add_bytes, divmod_bits, mul_into, sub_bytes};
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Mul, Sub};
use numeric_bits::W;
use numeric_traits::error::{Error, Result};

/// An `N`-bit unsigned integer: a [`W<N>`] interpreted as unsigned. `U<1>` represents `{0, 1}`;
/// `min(U<N>) == 0`, `max(U<N>) == 2^N - 1`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct U<const N: usize, const BYTES: usize>(pub(crate) W<N, BYTES>);

impl<const N: usize, const BYTES: usize> U<N, BYTES> {
    /// The value zero.
    #[must_use]
    pub const fn zero() -> Self {
        U(W::zero())
    }

    /// The value one.
    #[must_use]
    pub fn one() -> Self {
        let mut w = W::zero();
        w.set_bit(0, true);
        U(w)
    }

    /// Whether this value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// View the underlying bit container.
    #[must_use]
    pub const fn bits(&self) -> W<N, BYTES> {
        self.0
    }

    /// Wrap a bit container as an unsigned integer.
    #[must_use]
    pub const fn from_bits(bits: W<N, BYTES>) -> Self {
        U(bits)
    }

    /// Construct from a native `u128`, truncating silently if it doesn't fit in `N` bits. Chiefly
    /// useful for tests and small-width conversions.
    #[must_use]
    pub fn from_u128(val: u128) -> Self {
        let src = val.to_le_bytes();
        let mut bytes = [0u8; BYTES];
        for i in 0..BYTES.min(16) {
            bytes[i] = src[i];
        }
        U(W::from_le_bytes(bytes))
    }

    /// Widen to a native `u128`. Panics (via array bounds) only if `BYTES > 16`.
    #[must_use]
    pub fn to_u128(&self) -> u128 {
        let mut bytes = [0u8; 16];
        let src = self.0.to_le_bytes();
        for i in 0..BYTES.min(16) {
            bytes[i] = src[i];
        }
        u128::from_le_bytes(bytes)
    }

    /// Overwrite raw word (byte) `j`, re-masking the top-word invariant. Panics if `j >= BYTES`.
    pub fn set_word(&mut self, j: usize, v: u8) {
        self.0.set_word(j, v);
    }

    /// Sum with no truncation: `U<N> x U<N> -> U<N+1>`.
    #[must_use]
    pub fn expanding_add<const M: usize, const MB: usize>(&self, rhs: &Self) -> U<M, MB> {
        assert_eq!(M, N + 1, "expanding_add must widen by exactly one bit");
        let a: W<M, MB> = self.0.width_cast(false);
        let b: W<M, MB> = rhs.0.width_cast(false);
        U(W::from_le_bytes(add_bytes(a.to_le_bytes(), b.to_le_bytes())))
    }

    /// Difference with no truncation: `U<N> x U<N> -> U<N+1>`, representing a negative result
    /// in the two's-complement pattern of the wider width.
    #[must_use]
    pub fn expanding_sub<const M: usize, const MB: usize>(&self, rhs: &Self) -> U<M, MB> {
        assert_eq!(M, N + 1, "expanding_sub must widen by exactly one bit");
        let a: W<M, MB> = self.0.width_cast(false);
        let b: W<M, MB> = rhs.0.width_cast(false);
        U(W::from_le_bytes(sub_bytes(a.to_le_bytes(), b.to_le_bytes())))
    }

    /// Product with no truncation: `U<N> x U<N> -> U<2N>`.
    #[must_use]
    pub fn expanding_mul<const M: usize, const MB: usize>(&self, rhs: &Self) -> U<M, MB> {
        assert_eq!(M, 2 * N, "expanding_mul must double the width");
        U(mul_into(self.0, rhs.0))
    }

    /// Division and remainder, failing with [`Error::DivisionByZero`] if `rhs` is zero.
    /// `quotient * rhs + remainder == self`, with `0 <= remainder < rhs`.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (q, r) = divmod_bits(self.0, rhs.0);
        Ok((U(q), U(r)))
    }

    /// Cross-width comparison: widen both operands to `max(N, M)` bits under unsigned rules and
    /// compare.
    #[must_use]
    pub fn cmp_cross<const M: usize, const MB: usize, const CN: usize, const CB: usize>(
        &self,
        other: &U<M, MB>,
    ) -> Ordering {
        let a: W<CN, CB> = self.0.width_cast(false);
        let b: W<CN, CB> = other.0.width_cast(false);
        a.cmp_unsigned(&b)
    }

    /// Truncate or zero-extend to a new width.
    #[must_use]
    pub fn width_cast<const M: usize, const MB: usize>(&self) -> U<M, MB> {
        U(self.0.width_cast(false))
    }

    /// Narrowing cast, failing with [`Error::Overflow`] if the value does not fit in `M` bits.
    pub fn narrow_cast<const M: usize, const MB: usize>(&self) -> Result<U<M, MB>> {
        let narrowed: U<M, MB> = self.width_cast();
        let back: Self = narrowed.width_cast();
        if back == *self {
            Ok(narrowed)
        } else {
            Err(Error::Overflow)
        }
    }

    /// Render in base `2^K` for `K` in `1..=4`: `ceil(N / K)` digits, MSB group first.
    #[must_use]
    pub fn to_base_2n<const K: usize>(&self) -> String {
        debug_assert!((1..=4).contains(&K), "to_base_2n supports K in 1..=4");
        const DIGITS: &[u8; 16] = b"0123456789abcdef";
        let num_groups = (N + K - 1) / K;
        let mut s = String::with_capacity(num_groups);
        for g in (0..num_groups).rev() {
            let mut val: u32 = 0;
            for b in 0..K {
                let bit_idx = g * K + b;
                if bit_idx < N && self.0.get_bit(bit_idx) {
                    val |= 1 << b;
                }
            }
            s.push(DIGITS[val as usize] as char);
        }
        s
    }

    /// Binary-coded decimal digits (most significant first), produced by the shift-and-add-3
    /// algorithm: for each source bit from MSB to LSB, every BCD digit >= 5 gets +3, then the
    /// whole digit register shifts left and the next source bit is appended.
    #[must_use]
    pub fn to_bcd(&self) -> Vec<u8> {
        let num_digits = (N * 30103) / 100_000 + 1;
        let mut digits = vec![0u8; num_digits];
        for i in (0..N).rev() {
            for d in digits.iter_mut() {
                if *d >= 5 {
                    *d += 3;
                }
            }
            let mut carry = self.0.get_bit(i) as u8;
            for d in digits.iter_mut().rev() {
                let next_carry = (*d >> 3) & 1;
                *d = ((*d << 1) | carry) & 0xf;
                carry = next_carry;
            }
        }
        digits
    }

    /// Decimal string via [`Self::to_bcd`], with leading zeros stripped (`"0"` for zero).
    #[must_use]
    pub fn to_decimal(&self) -> String {
        let digits = self.to_bcd();
        let s: String = digits.iter().map(|d| (b'0' + d) as char).collect();
        let trimmed = s.trim_start_matches('0');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Hexadecimal string, `ceil(N / 4)` digits.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_base_2n::<4>()
    }

    /// Octal string, `ceil(N / 3)` digits.
    #[must_use]
    pub fn to_octal(&self) -> String {
        self.to_base_2n::<3>()
    }

    /// Binary string, `N` digits.
    #[must_use]
    pub fn to_binary(&self) -> String {
        self.to_base_2n::<1>()
    }
}

impl<const N: usize, const BYTES: usize> Add for U<N, BYTES> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        U(W::from_le_bytes(add_bytes(
            self.0.to_le_bytes(),
            rhs.0.to_le_bytes(),
        )))
    }
}

impl<const N: usize, const BYTES: usize> Sub for U<N, BYTES> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        U(W::from_le_bytes(sub_bytes(
            self.0.to_le_bytes(),
            rhs.0.to_le_bytes(),
        )))
    }
}

impl<const N: usize, const BYTES: usize> Mul for U<N, BYTES> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        U(mul_into::<N, BYTES, N, BYTES>(self.0, rhs.0))
    }
}

impl<const N: usize, const BYTES: usize> PartialOrd for U<N, BYTES> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize, const BYTES: usize> Ord for U<N, BYTES> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_unsigned(&other.0)
    }
}

impl<const N: usize, const BYTES: usize> fmt::Debug for U<N, BYTES> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U<{N}>({})", self.to_decimal())
    }
}

impl<const N: usize, const BYTES: usize> fmt::Display for U<N, BYTES> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sub_mul_wrap() {
        let a = U::<8, 1>::from_u128(250);
        let b = U::<8, 1>::from_u128(10);
        assert_eq!((a + b).to_u128(), 4); // 260 mod 256
        assert_eq!((b - a).to_u128(), (10i32 - 250).rem_euclid(256) as u128);
        let c = U::<8, 1>::from_u128(20);
        let d = U::<8, 1>::from_u128(20);
        assert_eq!((c * d).to_u128(), 400 % 256);
    }

    #[test]
    fn test_expanding_add_e1() {
        // E1: U<8>(170) * U<8>(3) expanding -> U<16>(510)
        let a = U::<8, 1>::from_u128(170);
        let b = U::<8, 1>::from_u128(3);
        let prod: U<16, 2> = a.expanding_mul(&b);
        assert_eq!(prod.to_u128(), 510);
    }

    #[test]
    fn test_expanding_add_no_wrap() {
        let a = U::<8, 1>::from_u128(255);
        let b = U::<8, 1>::from_u128(1);
        let sum: U<9, 2> = a.expanding_add(&b);
        assert_eq!(sum.to_u128(), 256);
    }

    #[test]
    fn test_div_rem() {
        let a = U::<8, 1>::from_u128(17);
        let b = U::<8, 1>::from_u128(5);
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q.to_u128(), 3);
        assert_eq!(r.to_u128(), 2);
    }

    #[test]
    fn test_div_by_zero() {
        let a = U::<8, 1>::from_u128(17);
        let z = U::<8, 1>::zero();
        assert_eq!(a.div_rem(&z), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_decimal_hex_octal_e3() {
        let a = U::<16, 2>::from_u128(204);
        assert_eq!(a.to_decimal(), "204");
        assert_eq!(a.to_hex(), "00cc");
        assert_eq!(a.to_octal(), "000314");
    }

    #[test]
    fn test_narrow_cast_overflow() {
        let a = U::<16, 2>::from_u128(300);
        let r: Result<U<8, 1>> = a.narrow_cast();
        assert_eq!(r, Err(Error::Overflow));
        let b = U::<16, 2>::from_u128(12);
        let r2: U<8, 1> = b.narrow_cast().unwrap();
        assert_eq!(r2.to_u128(), 12);
    }

    #[test]
    fn test_shift_identity() {
        let a = U::<8, 1>::from_u128(5);
        let shifted = U::<8, 1>::from_bits(a.bits().shl(3));
        assert_eq!(shifted.to_u128(), (5u128 * 8) % 256);
    }
}
