use std::fmt::Debug;

use num::{Bounded, Num, NumCast};

/// Runtime tag for the coordinate scalar a tree is built over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryElement {
    Float,
    Double,
    Int,
}

/// Coordinate scalar for box corners.
///
/// Implemented for `f32`, `f64` and `i32`. Float coordinates are assumed
/// NaN-free.
pub trait Element: Num + Bounded + NumCast + PartialOrd + Copy + Debug {
    const ELEMENT: GeometryElement;

    /// Midpoint of two coordinates, used for box centers and split
    /// positions. The integer midpoint rounds toward negative infinity.
    fn half_sum(a: Self, b: Self) -> Self;

    /// Difference `a - b`, used for box extents. The integer version
    /// saturates instead of overflowing on extreme spans.
    fn diff(a: Self, b: Self) -> Self;
}

impl Element for f32 {
    const ELEMENT: GeometryElement = GeometryElement::Float;

    #[inline]
    fn half_sum(a: Self, b: Self) -> Self {
        (a + b) * 0.5
    }

    #[inline]
    fn diff(a: Self, b: Self) -> Self {
        a - b
    }
}

impl Element for f64 {
    const ELEMENT: GeometryElement = GeometryElement::Double;

    #[inline]
    fn half_sum(a: Self, b: Self) -> Self {
        (a + b) * 0.5
    }

    #[inline]
    fn diff(a: Self, b: Self) -> Self {
        a - b
    }
}

impl Element for i32 {
    const ELEMENT: GeometryElement = GeometryElement::Int;

    // Overflow-safe floor midpoint.
    #[inline]
    fn half_sum(a: Self, b: Self) -> Self {
        (a & b) + ((a ^ b) >> 1)
    }

    #[inline]
    fn diff(a: Self, b: Self) -> Self {
        a.saturating_sub(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_midpoints() {
        assert_eq!(f32::half_sum(1.0, 2.0), 1.5);
        assert_eq!(f64::half_sum(-2.0, 2.0), 0.0);
    }

    #[test]
    fn int_midpoints_floor_without_overflow() {
        assert_eq!(i32::half_sum(1, 2), 1);
        assert_eq!(i32::half_sum(-1, 1), 0);
        assert_eq!(i32::half_sum(-3, -2), -3);
        assert_eq!(i32::half_sum(i32::MAX, i32::MAX - 2), i32::MAX - 1);
        assert_eq!(i32::half_sum(i32::MIN, i32::MIN + 2), i32::MIN + 1);
    }

    #[test]
    fn differences_saturate_for_ints() {
        assert_eq!(f64::diff(2.0, 0.5), 1.5);
        assert_eq!(i32::diff(5, 3), 2);
        assert_eq!(i32::diff(3, 5), -2);
        assert_eq!(i32::diff(i32::MAX, i32::MIN), i32::MAX);
        assert_eq!(i32::diff(i32::MIN, i32::MAX), i32::MIN);
    }
}
