//! 2D point type.

use super::Vec2;
use num_traits::Float;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::Sub;

/// A 2D point with x and y coordinates.
///
/// Generic over floating-point types (`f32` or `f64`).
///
/// Equality is exact coordinate equality with no tolerance. Points are also
/// `Eq`, `Ord` and `Hash` so they can key sets and maps; those impls assume
/// finite coordinates, which [`triangulate`](crate::triangulation::triangulate)
/// checks on entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Computes the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Compares by x, then by y.
    ///
    /// This is the fixed total order used for canonical edge keys. Incomparable
    /// (NaN) coordinates compare as equal.
    #[inline]
    pub fn cmp_xy(&self, other: &Self) -> Ordering {
        self.x
            .partial_cmp(&other.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.y.partial_cmp(&other.y).unwrap_or(Ordering::Equal))
    }
}

/// Bit-level key of a coordinate, with `-0.0` folded onto `0.0` so that the
/// key agrees with `==`.
fn coordinate_key<F: Float>(v: F) -> (u64, i16, i8) {
    if v == F::zero() {
        F::zero().integer_decode()
    } else {
        v.integer_decode()
    }
}

impl<F: Float> Eq for Point2<F> {}

impl<F: Float> Ord for Point2<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_xy(other)
    }
}

impl<F: Float> PartialOrd for Point2<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Float> Hash for Point2<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        coordinate_key(self.x).hash(state);
        coordinate_key(self.y).hash(state);
    }
}

// Point - Point = Vec2
impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}
