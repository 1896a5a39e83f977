//! Divide-and-conquer triangulation of point sets.
//!
//! This module splits the x-sorted input recursively, connects the smallest
//! pieces directly and stitches neighbors back together with a zig-zag merge
//! that approximates the Delaunay (empty-circumcircle) property.

mod base;
mod divide_conquer;
mod merge;

pub use base::triangulate_base;
pub use divide_conquer::{sort_points, triangulate, triangulate_recursive};
pub use merge::{merge, merge_with_stats, MergeStats};

use crate::predicates::{intersects, on_segment, orientation, Orientation};
use crate::primitives::{neighbors_of, Edge2, EdgeSet, Point2};
use num_traits::Float;
use std::collections::BTreeSet;

/// The output of a triangulation: the x-sorted vertices and the edge set.
///
/// Owned entirely by the caller; nothing in it refers back to algorithm
/// state.
#[derive(Debug, Clone)]
pub struct Triangulation<F> {
    vertices: Vec<Point2<F>>,
    edges: EdgeSet<F>,
}

impl<F: Float> Triangulation<F> {
    /// Creates a triangulation from its parts.
    pub fn new(vertices: Vec<Point2<F>>, edges: EdgeSet<F>) -> Self {
        Self { vertices, edges }
    }

    /// The vertices, sorted by x.
    pub fn vertices(&self) -> &[Point2<F>] {
        &self.vertices
    }

    /// The edge set.
    pub fn edges(&self) -> &EdgeSet<F> {
        &self.edges
    }

    /// Splits into vertices and edges.
    pub fn into_parts(self) -> (Vec<Point2<F>>, EdgeSet<F>) {
        (self.vertices, self.edges)
    }

    /// Vertices that no edge touches.
    ///
    /// Empty for any triangulation of two or more points.
    pub fn isolated_vertices(&self) -> Vec<Point2<F>> {
        let covered = self.edges.vertices();
        self.vertices
            .iter()
            .filter(|v| !covered.contains(*v))
            .copied()
            .collect()
    }

    /// Returns `true` if every vertex is reachable from the first one.
    pub fn is_connected(&self) -> bool {
        let Some(&start) = self.vertices.first() else {
            return true;
        };

        let mut seen = BTreeSet::from([start]);
        let mut stack = vec![start];
        while let Some(p) = stack.pop() {
            for n in neighbors_of(p, &self.edges) {
                if seen.insert(n) {
                    stack.push(n);
                }
            }
        }

        self.vertices.iter().all(|v| seen.contains(v))
    }

    /// Pairs of edges that intersect somewhere other than a shared endpoint.
    ///
    /// Edges meeting at an endpoint count when they overlap along a common
    /// line. Empty for a planar result. This is a quadratic check meant for
    /// validation, not for hot paths.
    pub fn crossing_edges(&self) -> Vec<(Edge2<F>, Edge2<F>)> {
        let edges: Vec<Edge2<F>> = self.edges.iter().copied().collect();
        let mut crossings = Vec::new();

        for (i, a) in edges.iter().enumerate() {
            for b in &edges[i + 1..] {
                let crossing = match shared_endpoint(a, b) {
                    Some(s) => overlaps_from(a, b, s),
                    None => intersects(a, b),
                };
                if crossing {
                    crossings.push((*a, *b));
                }
            }
        }

        crossings
    }
}

fn shared_endpoint<F: Float>(a: &Edge2<F>, b: &Edge2<F>) -> Option<Point2<F>> {
    [b.p(), b.q()].into_iter().find(|&p| a.touches(p))
}

/// Two edges leaving `shared` overlap when their far ends are collinear with
/// it and one of them lies on the other edge.
fn overlaps_from<F: Float>(a: &Edge2<F>, b: &Edge2<F>, shared: Point2<F>) -> bool {
    let (Some(fa), Some(fb)) = (a.other(shared), b.other(shared)) else {
        return false;
    };
    orientation(shared, fa, fb) == Orientation::Collinear
        && (on_segment(shared, fb, fa) || on_segment(shared, fa, fb))
}

impl<F: Float> PartialEq for Triangulation<F> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices && self.edges == other.edges
    }
}
