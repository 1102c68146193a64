//! The bit-source contract for random generation, plus a uniform integer distribution built on
//! it. The library only specifies the contract (a source of uniformly distributed machine
//! words); picking an actual generator and wiring it into `rand`-style APIs is left to callers.

use crate::U;
use numeric_traits::error::{Error, Result};

/// A source of uniformly distributed bytes. Thread-safety and seeding are the caller's concern.
pub trait RandomBitSource {
    /// Produce one uniformly distributed byte.
    fn next_byte(&mut self) -> u8;
}

/// Draw a uniformly distributed `U<N>` in `[min, max]` (inclusive).
///
/// Fills an `N + 1`-bit scratch register with random bytes and reduces modulo the range length;
/// this is slightly biased toward smaller values, same as the `% length` approach it's modelled
/// on - a rejection sampler would remove the bias at the cost of an unbounded retry loop.
///
/// `N1`/`BYTES1` must equal `N + 1` and its byte count; stable Rust can't derive that from `N`
/// alone, so callers supply it explicitly (same convention as `expanding_add`/`expanding_mul`).
pub fn uniform_uinteger_distribution<
    const N: usize,
    const BYTES: usize,
    const N1: usize,
    const BYTES1: usize,
>(
    min: U<N, BYTES>,
    max: U<N, BYTES>,
    source: &mut impl RandomBitSource,
) -> Result<U<N, BYTES>> {
    if min > max {
        return Err(Error::InvalidArgument("uniform_uinteger_distribution: min must be <= max"));
    }
    let min1: U<N1, BYTES1> = min.width_cast();
    let max1: U<N1, BYTES1> = max.width_cast() + U::one();
    let length = max1 - min1;

    let mut raw = U::<N1, BYTES1>::zero();
    for byte in 0..BYTES1 {
        raw.set_word(byte, source.next_byte());
    }
    let (_, remainder) = raw.div_rem(&length)?;
    Ok((min1 + remainder).width_cast())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Lcg(u64);

    impl RandomBitSource for Lcg {
        fn next_byte(&mut self) -> u8 {
            self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
            (self.0 >> 56) as u8
        }
    }

    #[test]
    fn test_uniform_within_bounds() {
        let mut rng = Lcg(12345);
        let min = U::<8, 1>::from_u128(10);
        let max = U::<8, 1>::from_u128(20);
        for _ in 0..200 {
            let v: U<8, 1> = uniform_uinteger_distribution::<8, 1, 9, 2>(min, max, &mut rng).unwrap();
            assert!(v.to_u128() >= 10 && v.to_u128() <= 20);
        }
    }

    #[test]
    fn test_uniform_rejects_inverted_bounds() {
        let mut rng = Lcg(1);
        let min = U::<8, 1>::from_u128(20);
        let max = U::<8, 1>::from_u128(10);
        assert!(uniform_uinteger_distribution::<8, 1, 9, 2>(min, max, &mut rng).is_err());
    }
}
