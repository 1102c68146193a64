/// Assert a condition at compile time.
#[macro_export]
macro_rules! static_assert {
    ($expr:expr) => {
        const _: () = assert!($expr);
    };
    ($expr:expr, $msg:literal) => {
        const _: () = assert!($expr, $msg);
    };
}

/// Assert that a type implements a set of traits, at compile time.
#[macro_export]
macro_rules! static_assert_traits {
    ($ty:ty: $trait:ident $( + $traits:ident )*) => {
        const _: () = {
            const fn __check<T: $trait $( + $traits )*>() {}
            __check::<$ty>();
        };
    };
}
