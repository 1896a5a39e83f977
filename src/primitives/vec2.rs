//! 2D direction vector.

use num_traits::Float;
use std::ops::Div;

/// A 2D vector, used for edge directions.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Returns the magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(self) -> F {
        self.dot(self).sqrt()
    }

    /// Returns the unit vector in the same direction.
    ///
    /// Returns `None` for the zero vector. There is no epsilon: any non-zero
    /// magnitude normalizes.
    #[inline]
    pub fn normalize(self) -> Option<Self> {
        let mag = self.magnitude();
        if mag > F::zero() && mag.is_finite() {
            Some(self / mag)
        } else {
            None
        }
    }
}

impl<F: Float> Div<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dot() {
        let a: Vec2<f64> = Vec2::new(1.0, 0.0);
        let b = Vec2::new(0.0, 1.0);
        assert_eq!(a.dot(b), 0.0);
        assert_eq!(Vec2::new(2.0, 3.0).dot(Vec2::new(4.0, -1.0)), 5.0);
    }

    #[test]
    fn test_normalize() {
        let v: Vec2<f64> = Vec2::new(3.0, 4.0);
        let n = v.normalize().unwrap();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n.x, 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_zero() {
        let v: Vec2<f64> = Vec2::new(0.0, 0.0);
        assert!(v.normalize().is_none());
    }

    #[test]
    fn test_normalize_tiny() {
        // No hidden epsilon: very short vectors still normalize.
        let v: Vec2<f64> = Vec2::new(1e-20, 0.0);
        assert_eq!(v.normalize(), Some(Vec2::new(1.0, 0.0)));
    }
}
