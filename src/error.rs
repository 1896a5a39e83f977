//! Error types for triangulation operations.

use thiserror::Error;

/// Errors that can occur while building a triangulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriangulationError {
    /// The base case was handed a point count it cannot triangulate.
    #[error("base case needs 2 or 3 points, got {count}")]
    InvalidBaseCase {
        /// Number of points supplied.
        count: usize,
    },

    /// Three points passed to a circumcircle computation are collinear.
    #[error("degenerate input: points are collinear")]
    CollinearPoints,

    /// An edge was requested between a point and itself.
    #[error("degenerate edge: endpoints are equal")]
    DegenerateEdge,

    /// An input coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Index of the offending point in the input.
        index: usize,
    },

    /// Two input points have exactly equal coordinates.
    #[error("points {first} and {second} are duplicates")]
    DuplicatePoint {
        /// Index of the first occurrence.
        first: usize,
        /// Index of the repeated occurrence.
        second: usize,
    },
}
