//! A lazy, finite `[start, end]` integer range with positive stride.

use crate::S;
use numeric_traits::error::{Error, Result};

/// Lazy iteration over `[start, end]` in steps of `stride`. Stride arithmetic is carried out in
/// a wider native integer so the walk never wraps at the type's own boundary.
pub struct IntegerRange<const N: usize, const BYTES: usize> {
    current: Option<i128>,
    end: i128,
    stride: i128,
}

impl<const N: usize, const BYTES: usize> IntegerRange<N, BYTES> {
    /// Build a range, failing with [`Error::InvalidArgument`] if `stride <= 0`.
    pub fn new(start: S<N, BYTES>, end: S<N, BYTES>, stride: S<N, BYTES>) -> Result<Self> {
        let stride = stride.to_i128();
        if stride <= 0 {
            return Err(Error::InvalidArgument("integer_range stride must be positive"));
        }
        Ok(IntegerRange {
            current: Some(start.to_i128()),
            end: end.to_i128(),
            stride,
        })
    }
}

impl<const N: usize, const BYTES: usize> Iterator for IntegerRange<N, BYTES> {
    type Item = S<N, BYTES>;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.current?;
        if cur > self.end {
            self.current = None;
            return None;
        }
        self.current = Some(cur + self.stride);
        Some(S::from_i128(cur))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_basic() {
        let start = S::<8, 1>::from_i128(0);
        let end = S::<8, 1>::from_i128(10);
        let stride = S::<8, 1>::from_i128(3);
        let values: Vec<i128> = IntegerRange::new(start, end, stride)
            .unwrap()
            .map(|s| s.to_i128())
            .collect();
        assert_eq!(values, vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_range_rejects_nonpositive_stride() {
        let start = S::<8, 1>::from_i128(0);
        let end = S::<8, 1>::from_i128(10);
        let stride = S::<8, 1>::from_i128(0);
        assert_eq!(
            IntegerRange::new(start, end, stride).err(),
            Some(Error::InvalidArgument("integer_range stride must be positive"))
        );
    }

    #[test]
    fn test_range_empty_when_start_past_end() {
        let start = S::<8, 1>::from_i128(5);
        let end = S::<8, 1>::from_i128(0);
        let stride = S::<8, 1>::from_i128(1);
        assert_eq!(IntegerRange::new(start, end, stride).unwrap().count(), 0);
    }
}
