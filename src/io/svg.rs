//! SVG export of triangulation results.
//!
//! Consumes a finished [`Triangulation`] or [`EdgeSet`]; nothing here feeds
//! back into the algorithm.
//!
//! # Example
//!
//! ```
//! use dc_delaunay::io::{edges_to_svg_path, triangulation_to_svg};
//! use dc_delaunay::triangulation::triangulate;
//! use dc_delaunay::Point2;
//!
//! let tri = triangulate(&[
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(5.0, 8.0),
//! ])
//! .unwrap();
//!
//! let path = edges_to_svg_path(tri.edges());
//! assert_eq!(path.matches('M').count(), 3);
//!
//! let doc = triangulation_to_svg(&tri, 200.0, 200.0);
//! assert!(doc.starts_with("<svg"));
//! ```

use crate::primitives::EdgeSet;
use crate::triangulation::Triangulation;
use num_traits::Float;
use std::fmt;

/// Converts an edge set to SVG path data, one `M x y L x y` subpath per edge.
pub fn edges_to_svg_path<F: Float + fmt::Display>(edges: &EdgeSet<F>) -> String {
    let mut result = String::new();

    for edge in edges {
        if !result.is_empty() {
            result.push(' ');
        }
        let (p, q) = (edge.p(), edge.q());
        result.push_str(&format!("M {} {} L {} {}", p.x, p.y, q.x, q.y));
    }

    result
}

/// Renders a triangulation as a standalone SVG document.
///
/// Edges become a single `<path>`, vertices become small circles. Coordinates
/// are emitted as-is, so callers choose `width` and `height` to frame them.
pub fn triangulation_to_svg<F: Float + fmt::Display>(
    tri: &Triangulation<F>,
    width: f64,
    height: f64,
) -> String {
    let mut doc = String::new();

    doc.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    ));
    doc.push('\n');
    doc.push_str(&format!(
        r#"<path d="{}" fill="none" stroke="black" stroke-width="1"/>"#,
        edges_to_svg_path(tri.edges())
    ));
    doc.push('\n');
    for v in tri.vertices() {
        doc.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="2" fill="red"/>"#,
            v.x, v.y
        ));
        doc.push('\n');
    }
    doc.push_str("</svg>\n");

    doc
}
