//! Recursive split/merge driver.
//!
//! Points are sorted by x, then the sorted sequence is halved by index until
//! each piece has at most three points. Pieces of two or three points are
//! connected directly; siblings are stitched back together with [`merge`].
//!
//! # Complexity
//!
//! - Recursion depth: O(log n)
//! - Each recursive call owns the edge set it returns, so sibling branches
//!   never share mutable state.
//!
//! # Example
//!
//! ```
//! use dc_delaunay::triangulation::triangulate;
//! use dc_delaunay::Point2;
//!
//! let points = vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(1.0, 2.0),
//!     Point2::new(3.0, 0.0),
//!     Point2::new(4.0, 2.0),
//! ];
//!
//! let tri = triangulate(&points).unwrap();
//! assert_eq!(tri.vertices().len(), 4);
//! assert_eq!(tri.edges().len(), 5);
//! ```

use super::{merge, triangulate_base, Triangulation};
use crate::error::TriangulationError;
use crate::primitives::{EdgeSet, Point2};
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Returns the points sorted by ascending x.
///
/// The sort is stable: points with equal x keep their input order.
pub fn sort_points<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));
    sorted
}

/// Triangulates points that are already sorted by x.
///
/// Zero or one point yields no edges, two or three points are connected
/// directly, and larger inputs are split at `len / 2` and merged.
///
/// The returned vertex list is `points` unchanged.
pub fn triangulate_recursive<F: Float>(
    points: &[Point2<F>],
) -> Result<Triangulation<F>, TriangulationError> {
    debug_assert!(
        points.windows(2).all(|w| w[0].x <= w[1].x),
        "input must be sorted by x"
    );

    let edges = match points.len() {
        0 | 1 => EdgeSet::new(),
        2 | 3 => triangulate_base(points)?,
        n => {
            let (left, right) = points.split_at(n / 2);
            tracing::debug!(left = left.len(), right = right.len(), "splitting");

            let left_tri = triangulate_recursive(left)?;
            let right_tri = triangulate_recursive(right)?;
            let (left_points, left_edges) = left_tri.into_parts();
            let (right_points, right_edges) = right_tri.into_parts();

            merge(&left_points, &right_points, left_edges, right_edges)?
        }
    };

    Ok(Triangulation::new(points.to_vec(), edges))
}

/// Triangulates an arbitrary point sequence.
///
/// Validates the input, sorts it with [`sort_points`] and runs
/// [`triangulate_recursive`]. The result's vertex list is the sorted input.
///
/// # Errors
///
/// - [`TriangulationError::NonFiniteCoordinate`] for NaN or infinite input.
/// - [`TriangulationError::DuplicatePoint`] when two points are exactly equal.
/// - [`TriangulationError::CollinearPoints`] when the merge meets a
///   degenerate configuration.
pub fn triangulate<F: Float>(points: &[Point2<F>]) -> Result<Triangulation<F>, TriangulationError> {
    validate(points)?;

    let sorted = sort_points(points);
    let tri = triangulate_recursive(&sorted)?;

    tracing::debug!(
        vertices = tri.vertices().len(),
        edges = tri.edges().len(),
        "triangulation complete"
    );
    Ok(tri)
}

fn validate<F: Float>(points: &[Point2<F>]) -> Result<(), TriangulationError> {
    let mut seen: HashMap<Point2<F>, usize> = HashMap::with_capacity(points.len());

    for (index, &p) in points.iter().enumerate() {
        if !p.is_finite() {
            return Err(TriangulationError::NonFiniteCoordinate { index });
        }
        if let Some(&first) = seen.get(&p) {
            return Err(TriangulationError::DuplicatePoint {
                first,
                second: index,
            });
        }
        seen.insert(p, index);
    }

    Ok(())
}
