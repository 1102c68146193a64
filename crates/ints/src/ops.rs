//! Byte-level ripple-carry helpers shared by `U<N>` and `S<N>` arithmetic. Operate on raw little-
//! endian byte arrays; callers re-wrap through `W::from_le_bytes`, which re-masks any bits that
//! spilled past the container's true bit width.

use numeric_bits::W;

pub(crate) fn add_bytes<const BYTES: usize>(a: [u8; BYTES], b: [u8; BYTES]) -> [u8; BYTES] {
    let mut out = [0u8; BYTES];
    let mut carry = 0u16;
    for i in 0..BYTES {
        let sum = a[i] as u16 + b[i] as u16 + carry;
        out[i] = sum as u8;
        carry = sum >> 8;
    }
    out
}

pub(crate) fn sub_bytes<const BYTES: usize>(a: [u8; BYTES], b: [u8; BYTES]) -> [u8; BYTES] {
    let mut out = [0u8; BYTES];
    let mut borrow = 0i16;
    for i in 0..BYTES {
        let diff = a[i] as i16 - b[i] as i16 - borrow;
        if diff < 0 {
            out[i] = (diff + 256) as u8;
            borrow = 1;
        } else {
            out[i] = diff as u8;
            borrow = 0;
        }
    }
    out
}

/// Schoolbook shift-and-add multiply: widens `a` to the destination width, then accumulates
/// `a << i` for every set bit `i` of `b`. Correct for any destination width `M >= N`.
pub(crate) fn mul_into<
    const N: usize,
    const NB: usize,
    const M: usize,
    const MB: usize,
>(
    a: W<N, NB>,
    b: W<N, NB>,
) -> W<M, MB> {
    let a_wide: W<M, MB> = a.width_cast(false);
    let mut acc = W::<M, MB>::zero();
    for i in 0..N {
        if b.get_bit(i) {
            let shifted = a_wide.shl(i);
            acc = W::from_le_bytes(add_bytes(acc.to_le_bytes(), shifted.to_le_bytes()));
        }
    }
    acc
}

/// Restoring long division: for each dividend bit from MSB to LSB, shift the remainder left,
/// bring in the next dividend bit, and subtract the divisor back out if it still fits.
pub(crate) fn divmod_bits<const N: usize, const NB: usize>(
    num: W<N, NB>,
    den: W<N, NB>,
) -> (W<N, NB>, W<N, NB>) {
    let mut quotient = W::<N, NB>::zero();
    let mut remainder = W::<N, NB>::zero();
    for i in (0..N).rev() {
        remainder = remainder.shl(1);
        remainder.set_bit(0, num.get_bit(i));
        if remainder.cmp_unsigned(&den) != core::cmp::Ordering::Less {
            remainder = W::from_le_bytes(sub_bytes(remainder.to_le_bytes(), den.to_le_bytes()));
            quotient.set_bit(i, true);
        }
    }
    (quotient, remainder)
}
