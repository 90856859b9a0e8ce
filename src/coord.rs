use std::fmt::Debug;

use crate::axis::Axis;
use crate::element::Element;

/// Corner coordinate for axis-aligned boxes: a 2- or 3-axis vector of
/// [`Element`] scalars.
///
/// Implemented for the glam vectors covering every supported scalar and
/// axis-count combination: [`glam::Vec2`], [`glam::Vec3`], [`glam::Vec3A`],
/// [`glam::DVec2`], [`glam::DVec3`], [`glam::IVec2`] and [`glam::IVec3`].
pub trait Coord: Copy + Debug + PartialEq {
    type Elem: Element;

    /// Number of axes, 2 or 3.
    const AXIS_COUNT: usize;

    fn splat(value: Self::Elem) -> Self;
    /// Build a vector by sampling `f` at each axis in order.
    fn from_fn(f: impl FnMut(Axis) -> Self::Elem) -> Self;
    fn min(self, rhs: Self) -> Self;
    fn max(self, rhs: Self) -> Self;
    /// Component along `axis`. Panics for [`Axis::Z`] on a 2-axis vector.
    fn axis(self, axis: Axis) -> Self::Elem;
    /// True when every component is `<=` the matching component of `rhs`.
    fn all_le(self, rhs: Self) -> bool;
}

macro_rules! impl_coord2 {
    ($vec:ty, $elem:ty) => {
        impl Coord for $vec {
            type Elem = $elem;

            const AXIS_COUNT: usize = 2;

            #[inline]
            fn splat(value: $elem) -> Self {
                <$vec>::splat(value)
            }

            #[inline]
            fn from_fn(mut f: impl FnMut(Axis) -> $elem) -> Self {
                <$vec>::new(f(Axis::X), f(Axis::Y))
            }

            #[inline]
            fn min(self, rhs: Self) -> Self {
                <$vec>::min(self, rhs)
            }

            #[inline]
            fn max(self, rhs: Self) -> Self {
                <$vec>::max(self, rhs)
            }

            #[inline]
            fn axis(self, axis: Axis) -> $elem {
                match axis {
                    Axis::X => self.x,
                    Axis::Y => self.y,
                    Axis::Z => panic!("no Z axis on a 2-axis vector"),
                }
            }

            #[inline]
            fn all_le(self, rhs: Self) -> bool {
                self.cmple(rhs).all()
            }
        }
    };
}

macro_rules! impl_coord3 {
    ($vec:ty, $elem:ty) => {
        impl Coord for $vec {
            type Elem = $elem;

            const AXIS_COUNT: usize = 3;

            #[inline]
            fn splat(value: $elem) -> Self {
                <$vec>::splat(value)
            }

            #[inline]
            fn from_fn(mut f: impl FnMut(Axis) -> $elem) -> Self {
                <$vec>::new(f(Axis::X), f(Axis::Y), f(Axis::Z))
            }

            #[inline]
            fn min(self, rhs: Self) -> Self {
                <$vec>::min(self, rhs)
            }

            #[inline]
            fn max(self, rhs: Self) -> Self {
                <$vec>::max(self, rhs)
            }

            #[inline]
            fn axis(self, axis: Axis) -> $elem {
                match axis {
                    Axis::X => self.x,
                    Axis::Y => self.y,
                    Axis::Z => self.z,
                }
            }

            #[inline]
            fn all_le(self, rhs: Self) -> bool {
                self.cmple(rhs).all()
            }
        }
    };
}

impl_coord2!(glam::Vec2, f32);
impl_coord3!(glam::Vec3, f32);
impl_coord3!(glam::Vec3A, f32);
impl_coord2!(glam::DVec2, f64);
impl_coord3!(glam::DVec3, f64);
impl_coord2!(glam::IVec2, i32);
impl_coord3!(glam::IVec3, i32);
