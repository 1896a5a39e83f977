//! dc-delaunay - Divide-and-conquer planar triangulation
//!
//! Sorts points by x, splits them recursively, connects the smallest pieces
//! directly and stitches neighbors back together with a zig-zag merge that
//! approximates the Delaunay (empty-circumcircle) property.
//!
//! All predicates are exact and strict: no tolerances are applied, and
//! circumcircle centers are rounded to [`predicates::CIRCUMCENTER_DECIMALS`]
//! digits.
//!
//! # Example
//!
//! ```
//! use dc_delaunay::{triangulate, Point2};
//!
//! let points = vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(1.0, 2.0),
//!     Point2::new(3.0, 0.0),
//!     Point2::new(4.0, 2.0),
//!     Point2::new(2.0, 3.5),
//! ];
//!
//! let tri = triangulate(&points).unwrap();
//! assert!(tri.is_connected());
//! assert!(tri.isolated_vertices().is_empty());
//! ```

pub mod error;
pub mod io;
pub mod predicates;
pub mod primitives;
pub mod triangulation;

pub use error::TriangulationError;
pub use predicates::{
    angle_between, candidate_theta, circumcircle, contains, intersects, orientation, Orientation,
};
pub use primitives::{edges_touching, neighbors_of, Circle2, Edge2, EdgeSet, Point2, Vec2};
pub use triangulation::{triangulate, Triangulation};
