//! The error taxonomy shared by every numeric layer.
//!
//! Arithmetic on the numeric domains never traps except for integer division by zero and the
//! explicit `_throwing` casts - NaN and NaR are in-domain results, not errors, and are never
//! represented here.

/// The kinds of programming error this crate surfaces. Exceptional numeric *values* (NaN, NaR,
/// infinities) are never represented by this type - they are encoded in the value domain instead.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Integer division or remainder by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// A narrowing cast did not fit in the destination width.
    #[error("value does not fit in the destination width")]
    Overflow,
    /// An argument was outside the domain the operation accepts.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Convenience alias for fallible operations in this crate family.
pub type Result<T> = core::result::Result<T, Error>;
