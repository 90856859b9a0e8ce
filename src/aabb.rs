use num::Bounded;
use strum::IntoEnumIterator;

use crate::axis::Axis;
use crate::coord::Coord;
use crate::element::Element;

/// Axis-aligned bounding box described by its two corners.
///
/// The box is the closed interval `[min, max]` on every axis, so a
/// zero-size box is valid. An invalid box (some `min > max`) acts as the
/// empty set: it unions to nothing and intersects nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB<V> {
    pub min: V,
    pub max: V,
}

impl<V: Coord> Default for AABB<V> {
    fn default() -> Self {
        Self {
            min: V::splat(V::Elem::max_value()),
            max: V::splat(V::Elem::min_value()),
        }
    }
}

impl<V: Coord> AABB<V> {
    #[inline]
    pub fn new(min: V, max: V) -> Self {
        Self { min, max }
    }

    /// If the AABB is valid (min <= max)
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.all_le(self.max)
    }

    /// Grow the box to contain `other`. An invalid operand contributes
    /// nothing; growing an invalid box by a valid one replaces it.
    #[inline]
    pub fn grow(&mut self, other: &AABB<V>) {
        if !other.is_valid() {
            return;
        }
        if !self.is_valid() {
            *self = *other;
            return;
        }
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Union of the two boxes under [`grow`](Self::grow)'s validity rules.
    #[inline]
    pub fn union(&self, other: &AABB<V>) -> AABB<V> {
        let mut bounds = AABB::default();
        bounds.grow(self);
        bounds.grow(other);
        bounds
    }

    /// If the closed intervals overlap on every axis. Touching boxes
    /// intersect; an invalid box intersects nothing.
    #[inline]
    pub fn intersects(&self, other: &AABB<V>) -> bool {
        self.is_valid()
            && other.is_valid()
            && self.min.all_le(other.max)
            && other.min.all_le(self.max)
    }

    pub fn extent(&self) -> V {
        V::from_fn(|axis| self.extent_along(axis))
    }

    /// Size along `axis`. Integer extents saturate rather than overflow.
    #[inline]
    pub fn extent_along(&self, axis: Axis) -> V::Elem {
        V::Elem::diff(self.max.axis(axis), self.min.axis(axis))
    }

    /// Center coordinate along `axis`.
    #[inline]
    pub fn center_along(&self, axis: Axis) -> V::Elem {
        V::Elem::half_sum(self.min.axis(axis), self.max.axis(axis))
    }

    /// Axis with the largest extent; ties prefer the lower axis.
    pub fn longest_axis(&self) -> Axis {
        let mut best = Axis::X;
        let mut best_extent = self.extent_along(Axis::X);
        for axis in Axis::iter().take(V::AXIS_COUNT).skip(1) {
            let extent = self.extent_along(axis);
            if extent > best_extent {
                best = axis;
                best_extent = extent;
            }
        }
        best
    }
}
