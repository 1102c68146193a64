//! Posit decode: turn an `N`-bit two's-complement-style posit pattern into sign, scale, and a
//! normalised `1.fraction` significand, following the regime/exponent/fraction layout.
//!
//! Like [`numeric_reals::F`], the working significand lives in a `u128` scratch register rather
//! than the `W<N,BYTES>` bit container: practical posit widths stay well inside 64 bits (aarith's
//! own `posit8`/`16`/`32`/`64` typedefs top out there), so a fixed scalar register is simpler and
//! just as exact as a generic container for this width range.

/// Position of the implicit leading `1` in the significand scratch register. Fraction bits live
/// below it; values above are room for alignment/carry during arithmetic.
pub(crate) const FRAC_BITS: u32 = 60;

pub(crate) fn mask_n(n: usize) -> u128 {
    if n >= 128 {
        u128::MAX
    } else {
        (1u128 << n) - 1
    }
}

/// A decoded, non-special posit value: `value = (-1)^sign * 1.fraction * 2^scale`, where
/// `fraction` is held as a `1.xxx` register with the hidden bit at [`FRAC_BITS`].
pub(crate) struct Decoded {
    pub sign: bool,
    pub scale: i64,
    pub sig: u128,
}

pub(crate) enum Decode {
    Zero,
    NaR,
    Regular(Decoded),
}

#[must_use]
pub(crate) fn decode<const N: usize, const ES: usize>(raw: u128) -> Decode {
    let raw = raw & mask_n(N);
    if raw == 0 {
        return Decode::Zero;
    }
    let nar = 1u128 << (N - 1);
    if raw == nar {
        return Decode::NaR;
    }

    let sign = (raw >> (N - 1)) & 1 != 0;
    let m = if sign {
        ((!raw).wrapping_add(1)) & mask_n(N)
    } else {
        raw
    };

    let width = N - 1;
    let r0 = (m >> (width - 1)) & 1;
    let mut k: i64 = 0;
    let mut pos = width as i64 - 1;
    while pos >= 0 && (m >> pos) & 1 == r0 {
        k += 1;
        pos -= 1;
    }
    let ran_out = pos < 0;
    let regime = if r0 == 1 { k - 1 } else { -k };

    if ran_out {
        let scale = (1i64 << ES) * regime;
        return Decode::Regular(Decoded {
            sign,
            scale,
            sig: 1u128 << FRAC_BITS,
        });
    }

    // `pos` sits on the terminator bit; the exponent field starts just below it.
    let mut cursor = pos - 1;
    let mut exp_val: i64 = 0;
    let mut exp_bits_read = 0u32;
    while exp_bits_read < ES as u32 && cursor >= 0 {
        let bit = (m >> cursor) & 1;
        exp_val = (exp_val << 1) | bit as i64;
        cursor -= 1;
        exp_bits_read += 1;
    }
    exp_val <<= ES as u32 - exp_bits_read;

    let scale = (1i64 << ES) * regime + exp_val;

    let mut sig: u128 = 1u128 << FRAC_BITS;
    let mut shift = FRAC_BITS as i64 - 1;
    let mut c = cursor;
    while c >= 0 && shift >= 0 {
        let bit = (m >> c) & 1;
        sig |= bit << shift;
        c -= 1;
        shift -= 1;
    }

    Decode::Regular(Decoded { sign, scale, sig })
}

/// Regime bit count (including the terminator, when present) and exponent bit count actually
/// consumed, for a regular (non-zero, non-NaR) posit. Used by textual formatting to place field
/// separators; mirrors the field walk in [`decode`].
#[must_use]
pub(crate) fn field_widths<const N: usize, const ES: usize>(raw: u128) -> (usize, usize) {
    let raw = raw & mask_n(N);
    let sign = (raw >> (N - 1)) & 1 != 0;
    let m = if sign {
        ((!raw).wrapping_add(1)) & mask_n(N)
    } else {
        raw
    };

    let width = N - 1;
    let r0 = (m >> (width - 1)) & 1;
    let mut k: i64 = 0;
    let mut pos = width as i64 - 1;
    while pos >= 0 && (m >> pos) & 1 == r0 {
        k += 1;
        pos -= 1;
    }
    let ran_out = pos < 0;
    if ran_out {
        return (k as usize, 0);
    }
    let regime_bits = k as usize + 1;
    let exp_bits = ES.min((pos + 1) as usize);
    (regime_bits, exp_bits)
}

/// Two's-complement negation of a posit raw pattern. Zero and NaR are fixed points.
#[must_use]
pub(crate) fn neg_raw<const N: usize>(raw: u128) -> u128 {
    let raw = raw & mask_n(N);
    if raw == 0 {
        return 0;
    }
    let nar = 1u128 << (N - 1);
    if raw == nar {
        return raw;
    }
    ((!raw).wrapping_add(1)) & mask_n(N)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode;

    #[test]
    fn test_decode_zero_and_nar() {
        assert!(matches!(decode::<8, 2>(0), Decode::Zero));
        assert!(matches!(decode::<8, 2>(0x80), Decode::NaR));
    }

    #[test]
    fn test_decode_one() {
        // posit8,0: 1.0 is encoded 0b01000000 (sign 0, regime "10" -> R=0, no exponent bits left
        // after regime consumes remaining budget except trailing zero fraction).
        let raw = encode::<8, 0>(false, 0, 1u128 << FRAC_BITS, false);
        match decode::<8, 0>(raw) {
            Decode::Regular(d) => {
                assert!(!d.sign);
                assert_eq!(d.scale, 0);
                assert_eq!(d.sig, 1u128 << FRAC_BITS);
            }
            _ => panic!("expected regular decode"),
        }
    }
}
