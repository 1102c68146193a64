//! Blanket implementations of this crate's traits for the machine primitive integers. These are
//! the "word" types the bit container and integer layers are built out of.

mod nz;

use crate::class::{Bounded, BoundedBit, Integral, Numeric, Signed, Unsigned};
use crate::identity::{One, Zero};
use crate::ops::Pow;

macro_rules! impl_unsigned_prim {
    ($($ty:ty),* $(,)?) => {$(
        impl Zero for $ty {
            #[inline]
            fn zero() -> Self { 0 }
            #[inline]
            fn is_zero(&self) -> bool { *self == 0 }
        }

        impl One for $ty {
            #[inline]
            fn one() -> Self { 1 }
            #[inline]
            fn is_one(&self) -> bool { *self == 1 }
        }

        impl Pow for $ty {
            type Output = $ty;
            #[inline]
            fn pow(self, rhs: Self) -> Self { <$ty>::pow(self, rhs as u32) }
        }

        impl Numeric for $ty {}
        impl Integral for $ty {}
        impl Unsigned for $ty {}

        impl Bounded for $ty {
            #[inline]
            fn min_value() -> Self { <$ty>::MIN }
            #[inline]
            fn max_value() -> Self { <$ty>::MAX }
        }

        impl BoundedBit for $ty {
            #[inline]
            fn leading_zeros(self) -> Self { <$ty>::leading_zeros(self) as $ty }
            #[inline]
            fn trailing_zeros(self) -> Self { <$ty>::trailing_zeros(self) as $ty }
        }
    )*};
}

macro_rules! impl_signed_prim {
    ($($ty:ty),* $(,)?) => {$(
        impl Zero for $ty {
            #[inline]
            fn zero() -> Self { 0 }
            #[inline]
            fn is_zero(&self) -> bool { *self == 0 }
        }

        impl One for $ty {
            #[inline]
            fn one() -> Self { 1 }
            #[inline]
            fn is_one(&self) -> bool { *self == 1 }
        }

        impl Pow for $ty {
            type Output = $ty;
            #[inline]
            fn pow(self, rhs: Self) -> Self { <$ty>::pow(self, rhs as u32) }
        }

        impl Numeric for $ty {}
        impl Integral for $ty {}

        impl Signed for $ty {
            #[inline]
            fn abs(self) -> Self { <$ty>::abs(self) }
            #[inline]
            fn is_positive(&self) -> bool { *self >= 0 }
            #[inline]
            fn is_negative(&self) -> bool { *self < 0 }
        }

        impl Bounded for $ty {
            #[inline]
            fn min_value() -> Self { <$ty>::MIN }
            #[inline]
            fn max_value() -> Self { <$ty>::MAX }
        }
    )*};
}

impl_unsigned_prim!(u8, u16, u32, u64, u128, usize);
impl_signed_prim!(i8, i16, i32, i64, i128, isize);
