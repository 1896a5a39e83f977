//! Trivial triangulations of two or three points.

use crate::error::TriangulationError;
use crate::primitives::{Edge2, EdgeSet, Point2};
use num_traits::Float;

/// Connects two or three points completely.
///
/// Two points give one edge, three give the triangle's three edges in
/// whatever order the points arrive.
///
/// # Errors
///
/// Returns [`TriangulationError::InvalidBaseCase`] for any other count.
///
/// # Example
///
/// ```
/// use dc_delaunay::triangulation::triangulate_base;
/// use dc_delaunay::Point2;
///
/// let pts = [Point2::new(0.0_f64, 0.0), Point2::new(1.0, 1.0), Point2::new(-1.0, -1.0)];
/// assert_eq!(triangulate_base(&pts).unwrap().len(), 3);
/// assert!(triangulate_base(&pts[..1]).is_err());
/// ```
pub fn triangulate_base<F: Float>(points: &[Point2<F>]) -> Result<EdgeSet<F>, TriangulationError> {
    match *points {
        [a, b] => Ok([Edge2::new(a, b)].into_iter().collect()),
        [a, b, c] => Ok([Edge2::new(a, b), Edge2::new(b, c), Edge2::new(a, c)]
            .into_iter()
            .collect()),
        _ => Err(TriangulationError::InvalidBaseCase {
            count: points.len(),
        }),
    }
}
