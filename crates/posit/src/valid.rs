//! Interval types: `interval_bound`, the `V<N, ES>` valid interval, `Bound` (value ± epsilon
//! tag), and `Tile` (a posit plus one uncertainty bit).

use crate::P;
use core::fmt;
use core::ops::{Add, Div, Mul, Sub};

/// Whether an interval endpoint includes the posit it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalBound {
    Open,
    Closed,
}

impl IntervalBound {
    #[must_use]
    pub fn negate(self) -> Self {
        match self {
            IntervalBound::Open => IntervalBound::Closed,
            IntervalBound::Closed => IntervalBound::Open,
        }
    }

    /// `CLOSED` iff both inputs are `CLOSED`, used when two bounds coincide during an operation.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        if self == IntervalBound::Closed && other == IntervalBound::Closed {
            IntervalBound::Closed
        } else {
            IntervalBound::Open
        }
    }
}

/// The sign an exact posit carries relative to a `bound`'s nominal value: exactly the value, one
/// ULP above or below it, or unknown which.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundSign {
    Exact,
    PlusEps,
    MinusEps,
    Unsure,
}

impl BoundSign {
    /// The eight-case sign table for multiplication (`EXACT` is the identity).
    #[must_use]
    pub fn mul(self, other: Self) -> Self {
        use BoundSign::{Exact, MinusEps, PlusEps, Unsure};
        match (self, other) {
            (Exact, s) | (s, Exact) => s,
            (PlusEps, PlusEps) | (MinusEps, MinusEps) => PlusEps,
            (PlusEps, MinusEps) | (MinusEps, PlusEps) => Unsure,
            (Unsure, _) | (_, Unsure) => Unsure,
        }
    }

    /// Sign table for addition: two matching signs keep it, anything else degrades to `UNSURE`.
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        use BoundSign::{Exact, MinusEps, PlusEps, Unsure};
        match (self, other) {
            (Exact, s) | (s, Exact) => s,
            (PlusEps, PlusEps) => PlusEps,
            (MinusEps, MinusEps) => MinusEps,
            _ => Unsure,
        }
    }
}

/// A posit tagged with its relationship to some nominal value: exact, one ULP above/below, or
/// unsure. Used internally by `valid` arithmetic to track endpoint provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound<const N: usize, const ES: usize> {
    pub value: P<N, ES>,
    pub sign: BoundSign,
}

impl<const N: usize, const ES: usize> Bound<N, ES> {
    #[must_use]
    pub fn new(value: P<N, ES>, sign: BoundSign) -> Self {
        Bound { value, sign }
    }

    #[must_use]
    pub fn exact(value: P<N, ES>) -> Self {
        Bound {
            value,
            sign: BoundSign::Exact,
        }
    }
}

/// A posit plus a single uncertainty bit: certain tiles denote their posit exactly, uncertain
/// ones denote the open interval between it and its successor (or to +-infinity at the extremes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile<const N: usize, const ES: usize> {
    pub value: P<N, ES>,
    pub uncertain: bool,
}

impl<const N: usize, const ES: usize> Tile<N, ES> {
    #[must_use]
    pub fn certain(value: P<N, ES>) -> Self {
        Tile {
            value,
            uncertain: false,
        }
    }

    #[must_use]
    pub fn uncertain(value: P<N, ES>) -> Self {
        Tile {
            value,
            uncertain: true,
        }
    }
}

/// The counter-clockwise arc on the projective posit circle from `start` (included iff its bound
/// is `CLOSED`) to `end` (likewise). Distinguished patterns: `empty = (NaR, CLOSED, NaR, CLOSED)`,
/// `all = (NaR, OPEN, NaR, OPEN)`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct V<const N: usize, const ES: usize> {
    pub start: P<N, ES>,
    pub start_bound: IntervalBound,
    pub end: P<N, ES>,
    pub end_bound: IntervalBound,
}

impl<const N: usize, const ES: usize> V<N, ES> {
    #[must_use]
    pub fn empty() -> Self {
        V {
            start: P::nar(),
            start_bound: IntervalBound::Closed,
            end: P::nar(),
            end_bound: IntervalBound::Closed,
        }
    }

    #[must_use]
    pub fn all() -> Self {
        V {
            start: P::nar(),
            start_bound: IntervalBound::Open,
            end: P::nar(),
            end_bound: IntervalBound::Open,
        }
    }

    #[must_use]
    pub fn exact(p: P<N, ES>) -> Self {
        V {
            start: p,
            start_bound: IntervalBound::Closed,
            end: p,
            end_bound: IntervalBound::Closed,
        }
    }

    /// Build an arbitrary interval from its four fields.
    #[must_use]
    pub fn from(start: P<N, ES>, start_bound: IntervalBound, end: P<N, ES>, end_bound: IntervalBound) -> Self {
        V { start, start_bound, end, end_bound }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start.is_nar()
            && self.end.is_nar()
            && self.start_bound == IntervalBound::Closed
            && self.end_bound == IntervalBound::Closed
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        self.start.is_nar()
            && self.end.is_nar()
            && self.start_bound == IntervalBound::Open
            && self.end_bound == IntervalBound::Open
    }

    /// Does this interval contain `p`, per the counter-clockwise-arc interpretation?
    #[must_use]
    pub fn contains(&self, p: P<N, ES>) -> bool {
        if self.is_empty() {
            return false;
        }
        if self.is_all() {
            return true;
        }
        let at_start = p == self.start && self.start_bound == IntervalBound::Closed;
        let at_end = p == self.end && self.end_bound == IntervalBound::Closed;
        if at_start || at_end {
            return true;
        }
        if self.start == self.end {
            // A degenerate (non-closed) single-point arc contains nothing beyond that point.
            return false;
        }
        if self.start < self.end {
            self.start < p && p < self.end
        } else {
            // Wraps through NaR, the point at infinity on the projective circle.
            p > self.start || p < self.end
        }
    }

    /// Widen a computed `(start, end)` endpoint pair by one ULP on each side, to keep the
    /// containment guarantee when the result may not be the tightest interval.
    fn widen(start: P<N, ES>, end: P<N, ES>) -> Self {
        V {
            start: start.pred(),
            start_bound: IntervalBound::Closed,
            end: end.succ(),
            end_bound: IntervalBound::Closed,
        }
    }

    fn binary_op(self, other: Self, op: impl Fn(P<N, ES>, P<N, ES>) -> P<N, ES>) -> Self {
        if self.is_empty() || other.is_empty() {
            return V::empty();
        }
        if self.is_all() || other.is_all() {
            return V::all();
        }
        let start = op(self.start, other.start);
        let end = op(self.end, other.end);
        Self::widen(start, end)
    }

    #[must_use]
    pub fn sqrt(self) -> Self {
        if self.is_empty() {
            return V::empty();
        }
        if self.is_all() {
            return V::all();
        }
        Self::widen(self.start.sqrt(), self.end.sqrt())
    }
}

impl<const N: usize, const ES: usize> Add for V<N, ES> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        self.binary_op(rhs, |a, b| a + b)
    }
}

impl<const N: usize, const ES: usize> Sub for V<N, ES> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        self.binary_op(rhs, |a, b| a - b)
    }
}

impl<const N: usize, const ES: usize> Mul for V<N, ES> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.binary_op(rhs, |a, b| a * b)
    }
}

impl<const N: usize, const ES: usize> Div for V<N, ES> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        self.binary_op(rhs, |a, b| a / b)
    }
}

impl<const N: usize, const ES: usize> fmt::Debug for V<N, ES> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl<const N: usize, const ES: usize> fmt::Display for V<N, ES> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("\u{2205}");
        }
        if self.start == self.end && self.start_bound == IntervalBound::Closed && self.end_bound == IntervalBound::Closed
        {
            return write!(f, "{}", self.start);
        }
        let open = self.start_bound == IntervalBound::Open || self.end_bound == IntervalBound::Open;
        let (lb, rb) = if open { ('(', ')') } else { ('[', ']') };
        let start_str = if self.start.is_nar() {
            "-\u{221E}".to_string()
        } else {
            self.start.to_string()
        };
        let end_str = if self.end.is_nar() {
            "\u{221E}".to_string()
        } else {
            self.end.to_string()
        };
        write!(f, "{lb}{start_str}, {end_str}{rb}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_contains_itself() {
        let one = P::<8, 2>::one();
        let v = V::<8, 2>::exact(one);
        assert!(v.contains(one));
        assert!(!v.contains(P::<8, 2>::zero()));
    }

    #[test]
    fn test_empty_contains_nothing() {
        let v = V::<8, 2>::empty();
        assert!(!v.contains(P::<8, 2>::zero()));
        assert!(!v.contains(P::<8, 2>::nar()));
    }

    #[test]
    fn test_all_contains_everything() {
        let v = V::<8, 2>::all();
        assert!(v.contains(P::<8, 2>::zero()));
        assert!(v.contains(P::<8, 2>::one()));
        assert!(v.contains(P::<8, 2>::nar()));
    }

    #[test]
    fn test_add_widens_and_contains_sum() {
        let one = P::<8, 2>::one();
        let v = V::exact(one) + V::exact(one);
        assert!(v.contains(one + one));
    }

    #[test]
    fn test_merge_closed_only_when_both_closed() {
        assert_eq!(IntervalBound::Closed.merge(IntervalBound::Closed), IntervalBound::Closed);
        assert_eq!(IntervalBound::Closed.merge(IntervalBound::Open), IntervalBound::Open);
    }

    #[test]
    fn test_bound_sign_table() {
        use BoundSign::{Exact, MinusEps, PlusEps, Unsure};
        assert_eq!(PlusEps.mul(PlusEps), PlusEps);
        assert_eq!(PlusEps.mul(MinusEps), Unsure);
        assert_eq!(Exact.mul(PlusEps), PlusEps);
    }

    #[test]
    fn test_e8_half_open_interval_containment() {
        // E8: valid<8,2>::from(posit(1), CLOSED, posit(2), OPEN) contains posit(1), not posit(2).
        let one = P::<8, 2>::one();
        let two = one + one;
        let v = V::from(one, IntervalBound::Closed, two, IntervalBound::Open);
        assert!(v.contains(one));
        assert!(!v.contains(two));
    }

    #[test]
    fn test_display_exact_and_empty() {
        let one = P::<8, 2>::one();
        assert_eq!(format!("{}", V::exact(one)), "1");
        assert_eq!(format!("{}", V::<8, 2>::empty()), "\u{2205}");
    }
}
